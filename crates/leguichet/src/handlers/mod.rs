//! HTTP handlers for REST API endpoints

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use leconseil::{evaluate, AdviceRequest, AdviceResult};
use leregistre::{record_counts, Storage};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};
use crate::openapi;
use crate::responses::StatsResponse;

/// Crop record CRUD handlers
pub mod crops;
/// Farmer CRUD handlers
pub mod farmers;
/// Soil record CRUD handlers
pub mod soil;
/// Water record CRUD handlers
pub mod water;

/// State shared across all handlers
///
/// Uses `Arc<Mutex<Storage>>` because `rusqlite::Connection` is not
/// `Sync`. Handlers must lock the mutex before touching storage and
/// release it before any await point.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe storage access requiring mutex lock
    pub storage: Arc<Mutex<Storage>>,

    /// Immutable server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new AppState instance with storage and configuration
    pub fn new(storage: Storage, config: ServerConfig) -> Self {
        Self {
            storage: Arc::new(Mutex::new(storage)),
            config: Arc::new(config),
        }
    }

    /// Create AppState from an existing Arc<Mutex<Storage>>
    pub fn new_from_arc(storage: Arc<Mutex<Storage>>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
        }
    }

    pub(crate) fn lock_storage(&self) -> ApiResult<MutexGuard<'_, Storage>> {
        self.storage
            .lock()
            .map_err(|_| ApiError::internal("Storage lock poisoned"))
    }
}

/// Timestamp used when a record arrives without `date_recorded`.
pub(crate) fn default_date_recorded() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// GET / - Service info
pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "LeChamp Farm Records",
        "status": "running",
        "endpoints": [
            "/api/health",
            "/api/stats",
            "/api/farmers",
            "/api/records/soil",
            "/api/records/water",
            "/api/records/crops",
            "/api/suggest",
            "/openapi.json",
        ],
    }))
}

/// GET /api/health - Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "leguichet",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/stats - Record counts for the dashboard
pub async fn stats(State(state): State<AppState>) -> ApiResult<Json<StatsResponse>> {
    let storage = state.lock_storage()?;
    let counts = record_counts(&storage)?;
    Ok(Json(StatsResponse::from(counts)))
}

/// GET /openapi.json - OpenAPI schema of the API surface
pub async fn openapi_schema() -> Json<serde_json::Value> {
    Json(openapi::schema())
}

/// POST /api/suggest - Advisory endpoint
///
/// The body is read leniently: a missing body, missing keys, or
/// wrong-typed values skip their rule family instead of failing the
/// request, so this endpoint never rejects input.
pub async fn suggest(body: Option<Json<serde_json::Value>>) -> Json<AdviceResult> {
    let payload = body.map(|Json(value)| value).unwrap_or(serde_json::Value::Null);
    let request = AdviceRequest::from_json(&payload);
    debug!(?request, "advice requested");
    Json(evaluate(&request))
}

/// Create router with all API endpoints
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health_check))
        .route("/api/stats", get(stats))
        .route("/openapi.json", get(openapi_schema))
        .route("/api/suggest", post(suggest))
        .route(
            "/api/farmers",
            post(farmers::create_farmer).get(farmers::list_farmers),
        )
        .route(
            "/api/farmers/:id",
            get(farmers::get_farmer)
                .put(farmers::update_farmer)
                .delete(farmers::delete_farmer),
        )
        .route(
            "/api/records/soil",
            post(soil::create_soil_record).get(soil::list_soil_records),
        )
        .route(
            "/api/records/soil/:id",
            get(soil::get_soil_record)
                .put(soil::update_soil_record)
                .delete(soil::delete_soil_record),
        )
        .route(
            "/api/records/water",
            post(water::create_water_record).get(water::list_water_records),
        )
        .route(
            "/api/records/water/:id",
            get(water::get_water_record)
                .put(water::update_water_record)
                .delete(water::delete_water_record),
        )
        // The crop list route has always been plural while the item
        // routes stay singular; existing clients use both spellings.
        .route("/api/records/crop", post(crops::create_crop_record))
        .route("/api/records/crops", get(crops::list_crop_records))
        .route(
            "/api/records/crop/:id",
            get(crops::get_crop_record)
                .put(crops::update_crop_record)
                .delete(crops::delete_crop_record),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_date_recorded_is_rfc3339() {
        let stamp = default_date_recorded();
        assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
    }
}
