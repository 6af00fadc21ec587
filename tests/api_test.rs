//! End-to-end HTTP tests through the full router and middleware stack.

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_root_reports_app_info_in_envelope() {
    let db = common::setup_db().await;
    let app = common::app(&db);

    let (status, body) = common::send(&app, "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response_status"], true);
    assert_eq!(body["status_code"], 200);
    assert_eq!(body["source_output"]["name"], "InvoAI User Management");
    assert_eq!(body["source_output"]["version"], "1.0.0");
}

#[tokio::test]
async fn test_health_pings_database() {
    let db = common::setup_db().await;
    let app = common::app(&db);

    let (status, body) = common::send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source_output"]["database"], "healthy");
}

#[tokio::test]
async fn test_vendor_lifecycle() {
    let db = common::setup_db().await;
    let app = common::app(&db);

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/v1/vendor/",
        Some(json!({"vendor_name": "Acme", "created_by": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status_code"], 201);
    assert_eq!(body["message"], "Vendor created successfully");
    let id = body["source_output"]["vendor_id"].as_i64().unwrap();

    let (status, body) = common::send(
        &app,
        "PUT",
        &format!("/api/v1/vendor/{id}"),
        Some(json!({"vendor_name": "Acme Corp", "updated_by": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source_output"]["vendor_name"], "Acme Corp");
    assert_eq!(body["source_output"]["created_by"], 1);

    let (status, body) =
        common::send(&app, "DELETE", &format!("/api/v1/vendor/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source_output"]["is_deleted"], 1);

    let (status, body) = common::send(&app, "GET", &format!("/api/v1/vendor/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["response_status"], false);
    assert_eq!(body["message"], "Vendor not found");
    assert!(body["source_output"].is_null());

    let (_, body) = common::send(&app, "GET", "/api/v1/vendor/", None).await;
    assert_eq!(body["source_output"], json!([]));
}

#[tokio::test]
async fn test_duplicate_vendor_is_409() {
    let db = common::setup_db().await;
    let app = common::app(&db);
    let payload = json!({"vendor_name": "Acme"});

    common::send(&app, "POST", "/api/v1/vendor/", Some(payload.clone())).await;
    let (status, body) = common::send(&app, "POST", "/api/v1/vendor/", Some(payload)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status_code"], 409);
}

#[tokio::test]
async fn test_non_integer_id_is_422() {
    let db = common::setup_db().await;
    let app = common::app(&db);

    let (status, body) = common::send(&app, "GET", "/api/v1/user/abc", None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["response_status"], false);
    assert_eq!(body["status_code"], 422);
}

#[tokio::test]
async fn test_invalid_body_is_422() {
    let db = common::setup_db().await;
    let app = common::app(&db);

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/v1/user/",
        Some(json!({"user_name": "jdoe", "password": "short"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("at least 8 characters"));

    let (status, _) = common::send(
        &app,
        "POST",
        "/api/v1/vendor/",
        Some(json!({"vendor_name": 42})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_user_responses_never_expose_hash() {
    let db = common::setup_db().await;
    let app = common::app(&db);

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/v1/user/",
        Some(json!({"user_name": "jdoe", "bio_id": 9, "password": "Secret123!"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["source_output"].get("password_hash").is_none());

    let (_, body) = common::send(&app, "GET", "/api/v1/user/", None).await;
    assert_eq!(body["source_output"]["total"], 1);
    assert!(!body.to_string().contains("argon2"));

    let (status, body) = common::send(&app, "GET", "/api/v1/user/bio/9", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source_output"][0]["user_name"], "jdoe");

    let (status, body) = common::send(&app, "GET", "/api/v1/user/bio/10", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No users found for this Bio ID");
}

#[tokio::test]
async fn test_login_over_http() {
    let db = common::setup_db().await;
    let app = common::app(&db);

    common::send(
        &app,
        "POST",
        "/api/v1/user/",
        Some(json!({"user_name": "jdoe", "bio_id": 9, "password": "Secret123!"})),
    )
    .await;

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/v1/auth/login",
        Some(json!({"user_name": "jdoe", "password": "Secret123!"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source_output"]["bio_id"], 9);
    assert!(body["source_output"]["login_time"].is_string());

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/v1/auth/login",
        Some(json!({"user_name": "jdoe", "password": "nope"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid username or password");
}

#[tokio::test]
async fn test_extraction_with_unknown_vendor_is_404() {
    let db = common::setup_db().await;
    let app = common::app(&db);

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/v1/extraction/",
        Some(json!({"extraction_name": "total", "vendor_id": 999})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Vendor not found");
}

#[tokio::test]
async fn test_put_null_clears_nullable_columns() {
    let db = common::setup_db().await;
    let app = common::app(&db);

    let (_, body) = common::send(
        &app,
        "POST",
        "/api/v1/vendor/",
        Some(json!({"vendor_name": "Acme"})),
    )
    .await;
    let vendor_id = body["source_output"]["vendor_id"].as_i64().unwrap();

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/v1/extraction/",
        Some(json!({
            "extraction_name": "total",
            "x_min": 1,
            "x_max": 10,
            "vendor_id": vendor_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["source_output"]["extraction_id"].as_i64().unwrap();

    let (status, body) = common::send(
        &app,
        "PUT",
        &format!("/api/v1/extraction/{id}"),
        Some(json!({"x_max": null, "vendor_id": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["source_output"]["x_max"].is_null());
    assert!(body["source_output"]["vendor_id"].is_null());
    assert_eq!(body["source_output"]["x_min"], 1);
    assert_eq!(body["source_output"]["extraction_name"], "total");

    let (_, body) = common::send(&app, "GET", &format!("/api/v1/extraction/{id}"), None).await;
    assert!(body["source_output"]["x_max"].is_null());

    let (_, body) = common::send(
        &app,
        "POST",
        "/api/v1/user/",
        Some(json!({"user_name": "jdoe", "bio_id": 9, "password": "Secret123!"})),
    )
    .await;
    let user_id = body["source_output"]["user_id"].as_i64().unwrap();

    let (status, body) = common::send(
        &app,
        "PUT",
        &format!("/api/v1/user/{user_id}"),
        Some(json!({"bio_id": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["source_output"]["bio_id"].is_null());
    assert_eq!(body["source_output"]["user_name"], "jdoe");
}

#[tokio::test]
async fn test_put_without_key_keeps_nullable_column() {
    let db = common::setup_db().await;
    let app = common::app(&db);

    let (_, body) = common::send(
        &app,
        "POST",
        "/api/v1/return-json/",
        Some(json!({"invoice_number": "INV-001", "extracted_json": {"total": 1}})),
    )
    .await;
    let id = body["source_output"]["return_id"].as_i64().unwrap();

    let (status, body) = common::send(
        &app,
        "PUT",
        &format!("/api/v1/return-json/{id}"),
        Some(json!({"extracted_json": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["source_output"]["extracted_json"].is_null());
    assert_eq!(body["source_output"]["invoice_number"], "INV-001");
}

#[tokio::test]
async fn test_return_json_stores_arbitrary_document() {
    let db = common::setup_db().await;
    let app = common::app(&db);

    let document = json!({"lines": [{"sku": "A1", "qty": 2}], "total": 99.5});
    let (status, body) = common::send(
        &app,
        "POST",
        "/api/v1/return-json/",
        Some(json!({"invoice_number": "INV-001", "extracted_json": document})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["source_output"]["return_id"].as_i64().unwrap();

    let (_, body) = common::send(&app, "GET", &format!("/api/v1/return-json/{id}"), None).await;
    assert_eq!(body["source_output"]["extracted_json"], document);
}

#[tokio::test]
async fn test_unknown_route_is_404_envelope() {
    let db = common::setup_db().await;
    let app = common::app(&db);

    let (status, body) = common::send(&app, "GET", "/api/v1/nothing", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Route not found");
}
