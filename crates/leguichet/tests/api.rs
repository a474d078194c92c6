//! End-to-end tests for the HTTP surface
//!
//! Each test builds a router over a throwaway database and drives it
//! with in-process requests.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use leguichet::config::ServerConfig;
use leguichet::handlers::{create_router, AppState};
use leregistre::Storage;
use serde_json::{json, Value};
use tempfile::NamedTempFile;
use tower::ServiceExt;

fn test_app() -> (Router, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let config = ServerConfig {
        db_path: temp_file.path().display().to_string(),
        ..Default::default()
    };
    let storage = Storage::open(temp_file.path()).unwrap();
    let app = create_router().with_state(AppState::new(storage, config));
    (app, temp_file)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _db) = test_app();

    let (status, body) = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "leguichet");
}

#[tokio::test]
async fn index_lists_endpoints() {
    let (app, _db) = test_app();

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    let endpoints = body["endpoints"].as_array().unwrap();
    assert!(endpoints.iter().any(|e| e == "/api/suggest"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (app, _db) = test_app();

    let (status, body) = send(&app, Method::GET, "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["openapi"], "3.0.3");
    assert!(body["paths"]["/api/farmers"].is_object());
}

#[tokio::test]
async fn farmer_crud_roundtrip() {
    let (app, _db) = test_app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/farmers",
        Some(json!({ "name": "Ramesh", "phone": "9876500000", "location": "Nashik" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Ramesh");
    let id = created["id"].as_i64().unwrap();

    let (status, farmer) = send(&app, Method::GET, &format!("/api/farmers/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(farmer["region"], "Nashik");

    // Partial update must leave unmentioned fields alone
    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/farmers/{id}"),
        Some(json!({ "region": "Pune" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Ramesh");

    let (_, farmer) = send(&app, Method::GET, &format!("/api/farmers/{id}"), None).await;
    assert_eq!(farmer["region"], "Pune");
    assert_eq!(farmer["phone"], "9876500000");

    let (status, list) = send(&app, Method::GET, "/api/farmers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, deleted) = send(&app, Method::DELETE, &format!("/api/farmers/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["success"], true);

    let (status, _) = send(&app, Method::GET, &format!("/api/farmers/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn farmer_name_is_required() {
    let (app, _db) = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/farmers",
        Some(json!({ "phone": "9876500000" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name is required");
}

#[tokio::test]
async fn unknown_farmer_is_404() {
    let (app, _db) = test_app();

    let (status, body) = send(&app, Method::GET, "/api/farmers/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Farmer not found");
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn soil_record_crud_roundtrip() {
    let (app, _db) = test_app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/records/soil",
        Some(json!({ "ph": 6.1, "moisture": 31.0, "soil_type": "sandy loam" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, record) = send(&app, Method::GET, &format!("/api/records/soil/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["ph"], 6.1);
    // date_recorded defaults to the time of creation
    assert!(record["date_recorded"].is_string());

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/records/soil/{id}"),
        Some(json!({ "moisture": 18.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, record) = send(&app, Method::GET, &format!("/api/records/soil/{id}"), None).await;
    assert_eq!(record["moisture"], 18.0);
    assert_eq!(record["soil_type"], "sandy loam");

    let (status, deleted) = send(
        &app,
        Method::DELETE,
        &format!("/api/records/soil/{id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["success"], true);

    let (status, _) = send(&app, Method::GET, &format!("/api/records/soil/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn crop_list_route_is_plural() {
    let (app, _db) = test_app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/records/crop",
        Some(json!({ "crop_name": "mirchi", "yield_kg": 120.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, list) = send(&app, Method::GET, "/api/records/crops", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["crop_name"], "mirchi");

    // The singular spelling only serves item routes
    let (status, _) = send(&app, Method::GET, "/api/records/crop", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn crop_name_is_required() {
    let (app, _db) = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/records/crop",
        Some(json!({ "yield_kg": 10.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "crop_name is required");
}

#[tokio::test]
async fn stats_track_every_table() {
    let (app, _db) = test_app();

    send(
        &app,
        Method::POST,
        "/api/farmers",
        Some(json!({ "name": "Ramesh" })),
    )
    .await;
    send(
        &app,
        Method::POST,
        "/api/records/water",
        Some(json!({ "ph": 7.4, "tds": 480.0 })),
    )
    .await;
    send(
        &app,
        Method::POST,
        "/api/records/water",
        Some(json!({ "ph": 7.1 })),
    )
    .await;

    let (status, stats) = send(&app, Method::GET, "/api/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["farmers"], 1);
    assert_eq!(stats["water"], 2);
    assert_eq!(stats["crops"], 0);
    assert_eq!(stats["soil"], 0);
}

#[tokio::test]
async fn suggest_with_empty_body_returns_fallback() {
    let (app, _db) = test_app();

    let (status, body) = send(&app, Method::POST, "/api/suggest", None).await;
    assert_eq!(status, StatusCode::OK);

    let suggestions = body["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(
        suggestions[0]["action"],
        "Soil looks balanced — maintain organic practices"
    );
    assert_eq!(suggestions[0]["confidence"], 0.5);
    assert!(body["generated_at"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn suggest_recency_rides_along_with_fallback() {
    let (app, _db) = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/suggest",
        Some(json!({ "days_since_last_water": 12 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let suggestions = body["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[1]["action"], "Immediate irrigation advised");
}

#[tokio::test]
async fn suggest_tolerates_wrong_typed_fields() {
    let (app, _db) = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/suggest",
        Some(json!({ "soil_ph": "very acidic", "moisture": [1, 2] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Wrong-typed readings are skipped, leaving only the fallback
    let suggestions = body["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0]["confidence"], 0.5);
}

#[tokio::test]
async fn suggest_full_payload_keeps_family_order() {
    let (app, _db) = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/suggest",
        Some(json!({
            "soil_ph": 5.0,
            "moisture": 10,
            "crop": "Chili Pepper",
            "soil_type": "Sandy Loam",
            "days_since_last_water": 12,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let actions: Vec<&str> = body["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["action"].as_str().unwrap())
        .collect();
    assert_eq!(
        actions,
        vec![
            "Apply lime (chalk) carefully",
            "Increase irrigation frequency",
            "Mulch and drip irrigation",
            "Increase organic matter and mulch",
            "Immediate irrigation advised",
        ]
    );
}
