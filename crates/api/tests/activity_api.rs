//! HTTP-level integration tests for `/activities`.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router
//! without an actual TCP listener.

mod common;

use std::collections::HashSet;

use axum::http::StatusCode;
use common::{activity_count, body_json, build_test_app, get, post_json, post_raw};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

fn payload(name: &str, category: &str, duration: i64) -> serde_json::Value {
    json!({
        "name": name,
        "category": category,
        "duration_minutes": duration,
        "instructions": "Follow along at your own pace.",
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_activity_returns_201_with_server_fields(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/activities", payload("Box breathing", "breathwork", 5)).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Box breathing");
    assert_eq!(json["category"], "breathwork");
    assert_eq!(json["duration_minutes"], 5);
    assert_eq!(json["instructions"], "Follow along at your own pace.");
    assert!(Uuid::parse_str(json["id"].as_str().unwrap()).is_ok());
    assert!(json["created_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_echoes_every_category_and_duration(pool: PgPool) {
    let categories = [
        "breathwork",
        "grounding",
        "journaling",
        "sensory_mindfulness",
        "movement",
        "nature",
        "connection",
        "cold_exposure",
        "meditation",
    ];
    let durations = [5, 10, 15, 20, 30];
    let mut ids = HashSet::new();

    for (i, category) in categories.iter().enumerate() {
        let duration = durations[i % durations.len()];
        let app = build_test_app(pool.clone());
        let response = post_json(app, "/activities", payload("A", category, duration)).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["category"], *category);
        assert_eq!(json["duration_minutes"], duration);
        assert!(ids.insert(json["id"].as_str().unwrap().to_string()));
    }

    assert_eq!(activity_count(&pool).await, categories.len() as i64);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_category_is_rejected_and_not_persisted(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/activities", payload("Yoga", "yoga", 10)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("category"));

    assert_eq!(activity_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn out_of_set_duration_is_rejected_and_not_persisted(pool: PgPool) {
    for duration in [0, 7, 25, 45, -5] {
        let app = build_test_app(pool.clone());
        let response = post_json(app, "/activities", payload("Walk", "movement", duration)).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("duration_minutes"));
    }

    assert_eq!(activity_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_field_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/activities",
        json!({"name": "Walk", "category": "movement", "duration_minutes": 10}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("instructions"));
    assert_eq!(activity_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_type_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/activities",
        json!({
            "name": "Walk",
            "category": "movement",
            "duration_minutes": "ten",
            "instructions": "Go."
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(activity_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn overlong_name_reports_field(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let long_name = "n".repeat(101);
    let response = post_json(app, "/activities", payload(&long_name, "nature", 15)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["name"].is_array());
    assert_eq!(activity_count(&pool).await, 0);
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let app = common::build_offline_app();
    let response = post_raw(app, "/activities", Some("application/json"), "{\"name\": ").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn missing_content_type_is_rejected() {
    let app = common::build_offline_app();
    let body = payload("Walk", "movement", 10).to_string();
    let response = post_raw(app, "/activities", None, &body).await;

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_empty_initially(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/activities").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_exactly_the_created_activities(pool: PgPool) {
    let mut created = HashSet::new();
    for (name, category, duration) in [
        ("Box breathing", "breathwork", 5),
        ("5-4-3-2-1", "grounding", 10),
        ("Gratitude list", "journaling", 15),
    ] {
        let app = build_test_app(pool.clone());
        let response = post_json(app, "/activities", payload(name, category, duration)).await;
        let json = body_json(response).await;
        created.insert(json["id"].as_str().unwrap().to_string());
    }

    let app = build_test_app(pool);
    let response = get(app, "/activities").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let listed: HashSet<String> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed, created);
}

#[tokio::test]
async fn list_surfaces_database_outage_as_500() {
    let app = common::build_offline_app();
    let response = get(app, "/activities").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
