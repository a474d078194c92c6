//! Crop record CRUD handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use leregistre::{CropRecord, CropStore};
use serde::Deserialize;
use tracing::info;

use super::{default_date_recorded, AppState};
use crate::error::{ApiError, ApiResult};
use crate::responses::{CropResponse, Deleted, RecordSaved};

/// Crop record fields accepted on create and update
#[derive(Debug, Default, Deserialize)]
pub struct CropPayload {
    /// Owning farmer
    pub farmer_id: Option<i64>,

    /// Name of the crop; required on create
    pub crop_name: Option<String>,

    /// Harvested yield in kilograms
    pub yield_kg: Option<f64>,

    /// Date the reading was taken; defaults to now
    pub date_recorded: Option<String>,

    /// Free-text notes
    pub notes: Option<String>,
}

/// POST /api/records/crop - Create a crop record
pub async fn create_crop_record(
    State(state): State<AppState>,
    Json(payload): Json<CropPayload>,
) -> ApiResult<(StatusCode, Json<RecordSaved>)> {
    let crop_name = payload
        .crop_name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::bad_request("crop_name is required"))?;

    let mut storage = state.lock_storage()?;
    let mut store = CropStore::new(&mut storage);
    let id = store.insert(&CropRecord {
        id: None,
        farmer_id: payload.farmer_id,
        crop_name,
        yield_kg: payload.yield_kg,
        date_recorded: Some(payload.date_recorded.unwrap_or_else(default_date_recorded)),
        notes: payload.notes,
    })?;

    info!(id, "crop record created");
    Ok((StatusCode::CREATED, Json(RecordSaved { id })))
}

/// GET /api/records/crops - List all crop records
pub async fn list_crop_records(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CropResponse>>> {
    let mut storage = state.lock_storage()?;
    let store = CropStore::new(&mut storage);
    let records = store.list()?.into_iter().map(CropResponse::from).collect();

    Ok(Json(records))
}

/// GET /api/records/crop/:id - Get a specific crop record
pub async fn get_crop_record(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> ApiResult<Json<CropResponse>> {
    let mut storage = state.lock_storage()?;
    let store = CropStore::new(&mut storage);
    let record = store
        .get(id)?
        .ok_or_else(|| ApiError::not_found("Record not found"))?;

    Ok(Json(record.into()))
}

/// PUT /api/records/crop/:id - Update a crop record
pub async fn update_crop_record(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<CropPayload>,
) -> ApiResult<Json<RecordSaved>> {
    let mut storage = state.lock_storage()?;
    let mut store = CropStore::new(&mut storage);
    let existing = store
        .get(id)?
        .ok_or_else(|| ApiError::not_found("Record not found"))?;

    let merged = CropRecord {
        id: existing.id,
        farmer_id: payload.farmer_id.or(existing.farmer_id),
        crop_name: payload.crop_name.unwrap_or(existing.crop_name),
        yield_kg: payload.yield_kg.or(existing.yield_kg),
        date_recorded: payload.date_recorded.or(existing.date_recorded),
        notes: payload.notes.or(existing.notes),
    };
    store.update(id, &merged)?;

    info!(id, "crop record updated");
    Ok(Json(RecordSaved { id }))
}

/// DELETE /api/records/crop/:id - Delete a crop record
pub async fn delete_crop_record(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> ApiResult<Json<Deleted>> {
    let mut storage = state.lock_storage()?;
    let mut store = CropStore::new(&mut storage);
    if !store.delete(id)? {
        return Err(ApiError::not_found("Record not found"));
    }

    info!(id, "crop record deleted");
    Ok(Json(Deleted { success: true }))
}
