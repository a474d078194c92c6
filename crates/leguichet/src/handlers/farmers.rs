//! Farmer CRUD handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use leregistre::{FarmerRecord, FarmerStore};
use serde::Deserialize;
use tracing::info;

use super::AppState;
use crate::error::{ApiError, ApiResult};
use crate::responses::{Deleted, FarmerResponse, FarmerSaved};

/// Farmer fields accepted on create and update
#[derive(Debug, Default, Deserialize)]
pub struct FarmerPayload {
    /// Farmer name; required on create
    pub name: Option<String>,

    /// Contact phone number
    pub phone: Option<String>,

    /// Village or region; accepted as either `location` or `region`
    #[serde(alias = "region")]
    pub location: Option<String>,
}

/// POST /api/farmers - Create a farmer
pub async fn create_farmer(
    State(state): State<AppState>,
    Json(payload): Json<FarmerPayload>,
) -> ApiResult<(StatusCode, Json<FarmerSaved>)> {
    let name = payload
        .name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::bad_request("name is required"))?;

    let mut storage = state.lock_storage()?;
    let mut store = FarmerStore::new(&mut storage);
    let id = store.insert(&FarmerRecord {
        id: None,
        name: name.clone(),
        phone: payload.phone,
        location: payload.location,
        created_at: None,
    })?;

    info!(id, "farmer created");
    Ok((StatusCode::CREATED, Json(FarmerSaved { id, name })))
}

/// GET /api/farmers - List all farmers
pub async fn list_farmers(State(state): State<AppState>) -> ApiResult<Json<Vec<FarmerResponse>>> {
    let mut storage = state.lock_storage()?;
    let store = FarmerStore::new(&mut storage);
    let farmers = store
        .list()?
        .into_iter()
        .map(FarmerResponse::from)
        .collect();

    Ok(Json(farmers))
}

/// GET /api/farmers/:id - Get a specific farmer
pub async fn get_farmer(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> ApiResult<Json<FarmerResponse>> {
    let mut storage = state.lock_storage()?;
    let store = FarmerStore::new(&mut storage);
    let farmer = store
        .get(id)?
        .ok_or_else(|| ApiError::not_found("Farmer not found"))?;

    Ok(Json(farmer.into()))
}

/// PUT /api/farmers/:id - Update a farmer
///
/// Only fields present in the payload are overwritten.
pub async fn update_farmer(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<FarmerPayload>,
) -> ApiResult<Json<FarmerSaved>> {
    let mut storage = state.lock_storage()?;
    let mut store = FarmerStore::new(&mut storage);
    let existing = store
        .get(id)?
        .ok_or_else(|| ApiError::not_found("Farmer not found"))?;

    let merged = FarmerRecord {
        id: existing.id,
        name: payload.name.unwrap_or(existing.name),
        phone: payload.phone.or(existing.phone),
        location: payload.location.or(existing.location),
        created_at: existing.created_at,
    };
    store.update(id, &merged)?;

    info!(id, "farmer updated");
    Ok(Json(FarmerSaved {
        id,
        name: merged.name,
    }))
}

/// DELETE /api/farmers/:id - Delete a farmer
pub async fn delete_farmer(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> ApiResult<Json<Deleted>> {
    let mut storage = state.lock_storage()?;
    let mut store = FarmerStore::new(&mut storage);
    if !store.delete(id)? {
        return Err(ApiError::not_found("Farmer not found"));
    }

    info!(id, "farmer deleted");
    Ok(Json(Deleted { success: true }))
}
