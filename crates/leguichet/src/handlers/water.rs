//! Water record CRUD handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use leregistre::{WaterRecord, WaterStore};
use serde::Deserialize;
use tracing::info;

use super::{default_date_recorded, AppState};
use crate::error::{ApiError, ApiResult};
use crate::responses::{Deleted, RecordSaved, WaterResponse};

/// Water record fields accepted on create and update
#[derive(Debug, Default, Deserialize)]
pub struct WaterPayload {
    /// Owning farmer
    pub farmer_id: Option<i64>,

    /// Water acidity (pH)
    pub ph: Option<f64>,

    /// Electrical conductivity
    pub ec: Option<f64>,

    /// Total dissolved solids
    pub tds: Option<f64>,

    /// Amount applied, in litres
    pub amount_l: Option<f64>,

    /// Date the reading was taken; defaults to now
    pub date_recorded: Option<String>,

    /// Free-text notes
    pub notes: Option<String>,
}

/// POST /api/records/water - Create a water record
pub async fn create_water_record(
    State(state): State<AppState>,
    Json(payload): Json<WaterPayload>,
) -> ApiResult<(StatusCode, Json<RecordSaved>)> {
    let mut storage = state.lock_storage()?;
    let mut store = WaterStore::new(&mut storage);
    let id = store.insert(&WaterRecord {
        id: None,
        farmer_id: payload.farmer_id,
        ph: payload.ph,
        ec: payload.ec,
        tds: payload.tds,
        amount_l: payload.amount_l,
        date_recorded: Some(payload.date_recorded.unwrap_or_else(default_date_recorded)),
        notes: payload.notes,
    })?;

    info!(id, "water record created");
    Ok((StatusCode::CREATED, Json(RecordSaved { id })))
}

/// GET /api/records/water - List all water records
pub async fn list_water_records(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<WaterResponse>>> {
    let mut storage = state.lock_storage()?;
    let store = WaterStore::new(&mut storage);
    let records = store.list()?.into_iter().map(WaterResponse::from).collect();

    Ok(Json(records))
}

/// GET /api/records/water/:id - Get a specific water record
pub async fn get_water_record(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> ApiResult<Json<WaterResponse>> {
    let mut storage = state.lock_storage()?;
    let store = WaterStore::new(&mut storage);
    let record = store
        .get(id)?
        .ok_or_else(|| ApiError::not_found("Record not found"))?;

    Ok(Json(record.into()))
}

/// PUT /api/records/water/:id - Update a water record
pub async fn update_water_record(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<WaterPayload>,
) -> ApiResult<Json<RecordSaved>> {
    let mut storage = state.lock_storage()?;
    let mut store = WaterStore::new(&mut storage);
    let existing = store
        .get(id)?
        .ok_or_else(|| ApiError::not_found("Record not found"))?;

    let merged = WaterRecord {
        id: existing.id,
        farmer_id: payload.farmer_id.or(existing.farmer_id),
        ph: payload.ph.or(existing.ph),
        ec: payload.ec.or(existing.ec),
        tds: payload.tds.or(existing.tds),
        amount_l: payload.amount_l.or(existing.amount_l),
        date_recorded: payload.date_recorded.or(existing.date_recorded),
        notes: payload.notes.or(existing.notes),
    };
    store.update(id, &merged)?;

    info!(id, "water record updated");
    Ok(Json(RecordSaved { id }))
}

/// DELETE /api/records/water/:id - Delete a water record
pub async fn delete_water_record(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> ApiResult<Json<Deleted>> {
    let mut storage = state.lock_storage()?;
    let mut store = WaterStore::new(&mut storage);
    if !store.delete(id)? {
        return Err(ApiError::not_found("Record not found"));
    }

    info!(id, "water record deleted");
    Ok(Json(Deleted { success: true }))
}
