// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Webhook route for identity-provider events.
//!
//! Events arrive signed with a shared `whsec_` secret (svix transport
//! convention): HMAC-SHA256 over `{id}.{timestamp}.{body}`, carried in
//! the `svix-signature` header as space-separated `v1,<base64>` entries.
//! Verification failures are 400s and nothing gets processed; storage
//! failures are 500s so the transport retries delivery.

use crate::error::AppError;
use crate::models::User;
use crate::time_utils::now_rfc3339;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use std::sync::Arc;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Allowed clock skew between the signing timestamp and now.
const TIMESTAMP_TOLERANCE_SECS: i64 = 300;

/// Webhook routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/webhooks", post(handle_event))
}

/// Identity-provider webhook event envelope.
#[derive(Deserialize, Debug)]
struct WebhookEvent {
    #[serde(rename = "type")]
    event_type: String,
    data: serde_json::Value,
}

/// Payload of a `user.created` event.
#[derive(Deserialize, Debug)]
struct UserCreatedData {
    id: String,
    #[serde(default)]
    email_addresses: Vec<EmailAddress>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
}

#[derive(Deserialize, Debug)]
struct EmailAddress {
    email_address: String,
}

/// Handle incoming webhook events (POST).
async fn handle_event(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    verify_signature(
        &state.config.webhook_signing_secret,
        &headers,
        &body,
        chrono::Utc::now().timestamp(),
    )?;

    let event: WebhookEvent = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Malformed webhook payload: {}", e)))?;

    match event.event_type.as_str() {
        "user.created" => {
            let data: UserCreatedData = serde_json::from_value(event.data).map_err(|e| {
                AppError::BadRequest(format!("Malformed user.created payload: {}", e))
            })?;

            if data.id.is_empty() {
                return Err(AppError::BadRequest(
                    "user.created event without a user id".to_string(),
                ));
            }

            let user = User {
                user_id: data.id,
                email: data
                    .email_addresses
                    .first()
                    .map(|e| e.email_address.clone()),
                first_name: data.first_name.unwrap_or_default(),
                last_name: data.last_name.unwrap_or_default(),
                created_at: now_rfc3339(),
            };

            let inserted = state.db.insert_user_if_absent(&user).await?;
            if inserted {
                tracing::info!(user_id = %user.user_id, "User mirror created");
            } else {
                // Webhook transports redeliver; an existing mirror is fine
                tracing::info!(user_id = %user.user_id, "Duplicate user.created delivery ignored");
            }
        }
        other => {
            tracing::debug!(event_type = %other, "Ignoring unhandled event type");
        }
    }

    Ok(StatusCode::OK)
}

/// Verify the transport signature on a webhook delivery.
///
/// Checks the timestamp tolerance first, then compares our HMAC against
/// every `v1,` candidate in the signature header in constant time.
fn verify_signature(
    secret: &str,
    headers: &HeaderMap,
    body: &[u8],
    now_unix: i64,
) -> Result<(), AppError> {
    let invalid = || AppError::BadRequest("Webhook signature verification failed".to_string());

    let msg_id = header_str(headers, "svix-id").ok_or_else(invalid)?;
    let timestamp = header_str(headers, "svix-timestamp").ok_or_else(invalid)?;
    let signatures = header_str(headers, "svix-signature").ok_or_else(invalid)?;

    let ts: i64 = timestamp.parse().map_err(|_| invalid())?;
    if (now_unix - ts).abs() > TIMESTAMP_TOLERANCE_SECS {
        tracing::warn!(timestamp = ts, "Webhook timestamp outside tolerance");
        return Err(invalid());
    }

    let key = secret
        .strip_prefix("whsec_")
        .ok_or_else(invalid)
        .and_then(|b64| STANDARD.decode(b64).map_err(|_| invalid()))?;

    let mut mac = HmacSha256::new_from_slice(&key)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid webhook secret: {}", e)))?;
    mac.update(msg_id.as_bytes());
    mac.update(b".");
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(body);
    let expected = mac.finalize().into_bytes();

    let matched = signatures
        .split_whitespace()
        .filter_map(|entry| entry.strip_prefix("v1,"))
        .filter_map(|b64| STANDARD.decode(b64).ok())
        .any(|candidate| candidate.as_slice().ct_eq(expected.as_slice()).into());

    if matched {
        Ok(())
    } else {
        tracing::warn!("Webhook signature mismatch");
        Err(invalid())
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
