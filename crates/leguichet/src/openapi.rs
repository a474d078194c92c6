//! OpenAPI schema for the API surface
//!
//! Served at `/openapi.json` so dashboards and API tooling can discover
//! the endpoints without a separate document to keep in sync.

use serde_json::{json, Map, Value};

/// Build the OpenAPI 3 document for the whole API.
pub fn schema() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "LeChamp Farm Records API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Farm record keeping with rule-based crop and soil advice.",
        },
        "paths": paths(),
        "components": { "schemas": schemas() },
    })
}

fn paths() -> Value {
    let mut paths = Map::new();

    paths.insert(
        "/".to_string(),
        json!({ "get": {
            "summary": "Service info",
            "responses": { "200": { "description": "Service status and endpoints" } },
        } }),
    );
    paths.insert(
        "/api/health".to_string(),
        json!({ "get": {
            "summary": "Health check",
            "responses": { "200": response("Service health", "Health") },
        } }),
    );
    paths.insert(
        "/api/stats".to_string(),
        json!({ "get": {
            "summary": "Record counts",
            "responses": { "200": response("Counts for the dashboard", "Stats") },
        } }),
    );
    paths.insert(
        "/api/suggest".to_string(),
        json!({ "post": {
            "summary": "Rule-based advice",
            "requestBody": body("AdviceRequest"),
            "responses": { "200": response("Generated advice", "AdviceResult") },
        } }),
    );

    paths.insert(
        "/api/farmers".to_string(),
        json!({
            "get": {
                "summary": "List farmers",
                "responses": { "200": list_response("Farmer list", "Farmer") },
            },
            "post": {
                "summary": "Create a farmer",
                "requestBody": body("Farmer"),
                "responses": {
                    "201": response("Created", "Saved"),
                    "400": response("Missing required field", "Error"),
                },
            },
        }),
    );
    paths.insert("/api/farmers/{id}".to_string(), item_ops("Farmer"));

    // The crop list route is plural while its item routes are singular,
    // so the family is spelled out per path.
    record_family(&mut paths, "/api/records/soil", None, "SoilRecord");
    record_family(&mut paths, "/api/records/water", None, "WaterRecord");
    record_family(
        &mut paths,
        "/api/records/crop",
        Some("/api/records/crops"),
        "CropRecord",
    );

    Value::Object(paths)
}

/// Insert the create/list/item paths for one record family.
fn record_family(paths: &mut Map<String, Value>, base: &str, list_path: Option<&str>, name: &str) {
    let list_op = json!({
        "summary": format!("List {name} entries"),
        "responses": { "200": list_response("Record list", name) },
    });
    let create_op = json!({
        "summary": format!("Create a {name}"),
        "requestBody": body(name),
        "responses": { "201": response("Created", "Saved") },
    });

    match list_path {
        // Separate list spelling: two path entries
        Some(list_path) => {
            paths.insert(base.to_string(), json!({ "post": create_op }));
            paths.insert(list_path.to_string(), json!({ "get": list_op }));
        }
        None => {
            paths.insert(base.to_string(), json!({ "get": list_op, "post": create_op }));
        }
    }

    paths.insert(format!("{base}/{{id}}"), item_ops(name));
}

/// Get/update/delete operations on a single resource.
fn item_ops(name: &str) -> Value {
    json!({
        "parameters": [{
            "name": "id",
            "in": "path",
            "required": true,
            "schema": { "type": "integer" },
        }],
        "get": {
            "summary": format!("Get a {name}"),
            "responses": {
                "200": response("The resource", name),
                "404": response("Unknown id", "Error"),
            },
        },
        "put": {
            "summary": format!("Update a {name}"),
            "requestBody": body(name),
            "responses": {
                "200": response("Updated", "Saved"),
                "404": response("Unknown id", "Error"),
            },
        },
        "delete": {
            "summary": format!("Delete a {name}"),
            "responses": {
                "200": response("Deleted", "Deleted"),
                "404": response("Unknown id", "Error"),
            },
        },
    })
}

fn body(name: &str) -> Value {
    json!({ "content": { "application/json": {
        "schema": { "$ref": format!("#/components/schemas/{name}") },
    } } })
}

fn response(description: &str, name: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": {
            "schema": { "$ref": format!("#/components/schemas/{name}") },
        } },
    })
}

fn list_response(description: &str, name: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": {
            "schema": {
                "type": "array",
                "items": { "$ref": format!("#/components/schemas/{name}") },
            },
        } },
    })
}

fn schemas() -> Value {
    json!({
        "Health": {
            "type": "object",
            "properties": {
                "status": { "type": "string" },
                "service": { "type": "string" },
                "version": { "type": "string" },
            },
        },
        "Stats": {
            "type": "object",
            "properties": {
                "farmers": { "type": "integer" },
                "crops": { "type": "integer" },
                "soil": { "type": "integer" },
                "water": { "type": "integer" },
            },
        },
        "Error": {
            "type": "object",
            "properties": {
                "error": { "type": "string" },
                "code": { "type": "string", "nullable": true },
            },
        },
        "Saved": {
            "type": "object",
            "properties": {
                "id": { "type": "integer" },
                "name": { "type": "string", "nullable": true },
            },
        },
        "Deleted": {
            "type": "object",
            "properties": { "success": { "type": "boolean" } },
        },
        "Farmer": {
            "type": "object",
            "required": ["name"],
            "properties": {
                "id": { "type": "integer", "readOnly": true },
                "name": { "type": "string" },
                "phone": { "type": "string", "nullable": true },
                "region": { "type": "string", "nullable": true },
            },
        },
        "CropRecord": {
            "type": "object",
            "required": ["crop_name"],
            "properties": {
                "id": { "type": "integer", "readOnly": true },
                "farmer_id": { "type": "integer", "nullable": true },
                "crop_name": { "type": "string" },
                "yield_kg": { "type": "number", "nullable": true },
                "date_recorded": { "type": "string", "nullable": true },
                "notes": { "type": "string", "nullable": true },
            },
        },
        "SoilRecord": {
            "type": "object",
            "properties": {
                "id": { "type": "integer", "readOnly": true },
                "farmer_id": { "type": "integer", "nullable": true },
                "ph": { "type": "number", "nullable": true },
                "nitrogen": { "type": "number", "nullable": true },
                "phosphorus": { "type": "number", "nullable": true },
                "potassium": { "type": "number", "nullable": true },
                "moisture": { "type": "number", "nullable": true },
                "soil_type": { "type": "string", "nullable": true },
                "date_recorded": { "type": "string", "nullable": true },
                "notes": { "type": "string", "nullable": true },
            },
        },
        "WaterRecord": {
            "type": "object",
            "properties": {
                "id": { "type": "integer", "readOnly": true },
                "farmer_id": { "type": "integer", "nullable": true },
                "ph": { "type": "number", "nullable": true },
                "ec": { "type": "number", "nullable": true },
                "tds": { "type": "number", "nullable": true },
                "amount_l": { "type": "number", "nullable": true },
                "date_recorded": { "type": "string", "nullable": true },
                "notes": { "type": "string", "nullable": true },
            },
        },
        "AdviceRequest": {
            "type": "object",
            "description": "All fields optional; absent fields skip their rule family.",
            "properties": {
                "soil_ph": { "type": "number", "nullable": true },
                "moisture": { "type": "number", "nullable": true },
                "soil_type": { "type": "string", "nullable": true },
                "crop": { "type": "string", "nullable": true },
                "days_since_last_water": { "type": "integer", "nullable": true },
            },
        },
        "Recommendation": {
            "type": "object",
            "properties": {
                "action": { "type": "string" },
                "reason": { "type": "string" },
                "confidence": { "type": "number", "minimum": 0.0, "maximum": 1.0 },
            },
        },
        "AdviceResult": {
            "type": "object",
            "properties": {
                "generated_at": { "type": "string", "format": "date-time" },
                "suggestions": {
                    "type": "array",
                    "items": { "$ref": "#/components/schemas/Recommendation" },
                },
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_has_all_route_families() {
        let doc = schema();
        let paths = doc.get("paths").and_then(Value::as_object).unwrap();

        for path in [
            "/",
            "/api/health",
            "/api/stats",
            "/api/suggest",
            "/api/farmers",
            "/api/farmers/{id}",
            "/api/records/soil",
            "/api/records/soil/{id}",
            "/api/records/water/{id}",
            "/api/records/crop",
            "/api/records/crops",
            "/api/records/crop/{id}",
        ] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn test_crop_list_spelling_is_plural() {
        let doc = schema();
        let paths = doc.get("paths").and_then(Value::as_object).unwrap();

        assert!(paths["/api/records/crops"].get("get").is_some());
        assert!(paths["/api/records/crops"].get("post").is_none());
        assert!(paths["/api/records/crop"].get("post").is_some());
    }
}
