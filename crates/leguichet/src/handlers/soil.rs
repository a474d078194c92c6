//! Soil record CRUD handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use leregistre::{SoilRecord, SoilStore};
use serde::Deserialize;
use tracing::info;

use super::{default_date_recorded, AppState};
use crate::error::{ApiError, ApiResult};
use crate::responses::{Deleted, RecordSaved, SoilResponse};

/// Soil record fields accepted on create and update
#[derive(Debug, Default, Deserialize)]
pub struct SoilPayload {
    /// Owning farmer
    pub farmer_id: Option<i64>,

    /// Soil acidity (pH)
    pub ph: Option<f64>,

    /// Nitrogen reading
    pub nitrogen: Option<f64>,

    /// Phosphorus reading
    pub phosphorus: Option<f64>,

    /// Potassium reading
    pub potassium: Option<f64>,

    /// Moisture percentage
    pub moisture: Option<f64>,

    /// Free-text soil type
    pub soil_type: Option<String>,

    /// Date the reading was taken; defaults to now
    pub date_recorded: Option<String>,

    /// Free-text notes
    pub notes: Option<String>,
}

/// POST /api/records/soil - Create a soil record
pub async fn create_soil_record(
    State(state): State<AppState>,
    Json(payload): Json<SoilPayload>,
) -> ApiResult<(StatusCode, Json<RecordSaved>)> {
    let mut storage = state.lock_storage()?;
    let mut store = SoilStore::new(&mut storage);
    let id = store.insert(&SoilRecord {
        id: None,
        farmer_id: payload.farmer_id,
        ph: payload.ph,
        nitrogen: payload.nitrogen,
        phosphorus: payload.phosphorus,
        potassium: payload.potassium,
        moisture: payload.moisture,
        soil_type: payload.soil_type,
        date_recorded: Some(payload.date_recorded.unwrap_or_else(default_date_recorded)),
        notes: payload.notes,
    })?;

    info!(id, "soil record created");
    Ok((StatusCode::CREATED, Json(RecordSaved { id })))
}

/// GET /api/records/soil - List all soil records
pub async fn list_soil_records(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<SoilResponse>>> {
    let mut storage = state.lock_storage()?;
    let store = SoilStore::new(&mut storage);
    let records = store.list()?.into_iter().map(SoilResponse::from).collect();

    Ok(Json(records))
}

/// GET /api/records/soil/:id - Get a specific soil record
pub async fn get_soil_record(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> ApiResult<Json<SoilResponse>> {
    let mut storage = state.lock_storage()?;
    let store = SoilStore::new(&mut storage);
    let record = store
        .get(id)?
        .ok_or_else(|| ApiError::not_found("Record not found"))?;

    Ok(Json(record.into()))
}

/// PUT /api/records/soil/:id - Update a soil record
pub async fn update_soil_record(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<SoilPayload>,
) -> ApiResult<Json<RecordSaved>> {
    let mut storage = state.lock_storage()?;
    let mut store = SoilStore::new(&mut storage);
    let existing = store
        .get(id)?
        .ok_or_else(|| ApiError::not_found("Record not found"))?;

    let merged = SoilRecord {
        id: existing.id,
        farmer_id: payload.farmer_id.or(existing.farmer_id),
        ph: payload.ph.or(existing.ph),
        nitrogen: payload.nitrogen.or(existing.nitrogen),
        phosphorus: payload.phosphorus.or(existing.phosphorus),
        potassium: payload.potassium.or(existing.potassium),
        moisture: payload.moisture.or(existing.moisture),
        soil_type: payload.soil_type.or(existing.soil_type),
        date_recorded: payload.date_recorded.or(existing.date_recorded),
        notes: payload.notes.or(existing.notes),
    };
    store.update(id, &merged)?;

    info!(id, "soil record updated");
    Ok(Json(RecordSaved { id }))
}

/// DELETE /api/records/soil/:id - Delete a soil record
pub async fn delete_soil_record(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> ApiResult<Json<Deleted>> {
    let mut storage = state.lock_storage()?;
    let mut store = SoilStore::new(&mut storage);
    if !store.delete(id)? {
        return Err(ApiError::not_found("Record not found"));
    }

    info!(id, "soil record deleted");
    Ok(Json(Deleted { success: true }))
}
