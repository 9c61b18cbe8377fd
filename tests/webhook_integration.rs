// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Integration tests for identity-provider webhook handling.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use tower::ServiceExt;

mod common;

type HmacSha256 = Hmac<Sha256>;

/// Sign a payload the way the webhook transport does.
fn sign(secret: &str, msg_id: &str, timestamp: i64, body: &[u8]) -> String {
    let key = STANDARD
        .decode(secret.strip_prefix("whsec_").unwrap())
        .unwrap();
    let mut mac = HmacSha256::new_from_slice(&key).unwrap();
    mac.update(format!("{}.{}.", msg_id, timestamp).as_bytes());
    mac.update(body);
    format!("v1,{}", STANDARD.encode(mac.finalize().into_bytes()))
}

fn signed_request(secret: &str, body: &str) -> Request<Body> {
    let timestamp = chrono::Utc::now().timestamp();
    let signature = sign(secret, "msg_test", timestamp, body.as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/webhooks")
        .header("content-type", "application/json")
        .header("svix-id", "msg_test")
        .header("svix-timestamp", timestamp.to_string())
        .header("svix-signature", signature)
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_webhook_without_signature_headers() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/webhooks")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"type":"user.created","data":{"id":"u1"}}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_webhook_invalid_signature_rejected_before_processing() {
    let (app, _) = common::create_test_app();

    let timestamp = chrono::Utc::now().timestamp();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/webhooks")
                .header("content-type", "application/json")
                .header("svix-id", "msg_test")
                .header("svix-timestamp", timestamp.to_string())
                .header("svix-signature", "v1,bm90IGEgcmVhbCBzaWduYXR1cmU=")
                .body(Body::from(r#"{"type":"user.created","data":{"id":"u1"}}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    // 400, not 500: the offline mock db would error if processing ran
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_webhook_unhandled_event_acknowledged() {
    let (app, state) = common::create_test_app();

    let body = json!({
        "type": "session.created",
        "data": { "id": "sess_1" }
    })
    .to_string();

    let response = app
        .oneshot(signed_request(&state.config.webhook_signing_secret, &body))
        .await
        .unwrap();

    // Recognized transport, unhandled event type: acknowledged without processing
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_webhook_user_created_reaches_storage() {
    let (app, state) = common::create_test_app();

    let body = json!({
        "type": "user.created",
        "data": {
            "id": "user_2abc",
            "email_addresses": [{ "email_address": "a@example.com" }],
            "first_name": "Ada",
            "last_name": "Lovelace"
        }
    })
    .to_string();

    let response = app
        .oneshot(signed_request(&state.config.webhook_signing_secret, &body))
        .await
        .unwrap();

    // Signature verified and the event dispatched; the offline mock db
    // fails the insert, which must surface as a 500 so the transport retries
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_webhook_malformed_payload() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(signed_request(
            &state.config.webhook_signing_secret,
            "not json at all",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_webhook_user_created_without_id() {
    let (app, state) = common::create_test_app();

    let body = json!({
        "type": "user.created",
        "data": { "first_name": "Ada" }
    })
    .to_string();

    let response = app
        .oneshot(signed_request(&state.config.webhook_signing_secret, &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
