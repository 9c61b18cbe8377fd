// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Favorites API input validation tests.
//!
//! The create handlers must reject payloads missing the identifying
//! fields with a 400 *before* touching storage; the offline mock
//! database makes any storage access a 500, so a 400 here proves the
//! ordering.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

mod common;

fn post_json(uri: &str, token: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_create_gym_missing_fields_rejected_before_storage() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("u1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(post_json("/api/favGyms", &token, json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_gym_valid_payload_reaches_storage() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("u1", &state.config.jwt_signing_key);

    let body = json!({
        "gym": {
            "place_id": "p1",
            "name": "Gym A",
            "formatted_address": "1 Rd"
        }
    });

    let response = app
        .oneshot(post_json("/api/favGyms", &token, body))
        .await
        .unwrap();

    // Validation passed; the offline mock fails at the storage step
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_create_workout_missing_name_rejected() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("u1", &state.config.jwt_signing_key);

    let body = json!({
        "workout": { "id": "0001", "bodyPart": "legs" },
        "comment": "leg day"
    });

    let response = app
        .oneshot(post_json("/api/favWorkouts", &token, body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_recipe_missing_item_key_rejected() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("u1", &state.config.jwt_signing_key);

    // No "recipe" key at all: defaults to an empty item, which fails validation
    let response = app
        .oneshot(post_json(
            "/api/favRecipes",
            &token,
            json!({ "comment": "looks tasty" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_vegan_recipe_missing_title_rejected() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("u1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(post_json(
            "/api/favVeganRecipes",
            &token,
            json!({ "recipe": { "id": "77" } }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mutations_require_auth() {
    let (app, _) = common::create_test_app();

    let post = Request::builder()
        .method("POST")
        .uri("/api/favGyms")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"gym":{"place_id":"p1","name":"Gym A"}}"#))
        .unwrap();
    let response = app.clone().oneshot(post).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let put = Request::builder()
        .method("PUT")
        .uri("/api/favGyms/u1_p1")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"comment":"hi"}"#))
        .unwrap();
    let response = app.clone().oneshot(put).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let delete = Request::builder()
        .method("DELETE")
        .uri("/api/favGyms/u1_p1")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(delete).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_comment_offline_is_storage_error_not_validation() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("u1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/favWorkouts/u1_0001")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header("content-type", "application/json")
                .body(Body::from(r#"{"comment":"updated"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    // Ownership lookup hits the offline mock
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
