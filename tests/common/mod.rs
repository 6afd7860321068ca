use std::sync::Arc;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use notes_api::auth::{generate_jwt, Claims};
use notes_api::database::memory::MemoryNoteRepository;
use notes_api::state::AppState;

/// Full router over a fresh in-memory store
pub fn test_app() -> Router {
    notes_api::app(AppState::new(Arc::new(MemoryNoteRepository::default())))
}

/// Bearer token for the given user id, minted with the dev secret
pub fn bearer(user_id: Uuid) -> String {
    let token = generate_jwt(Claims::new(user_id)).expect("failed to mint test token");
    format!("Bearer {}", token)
}

/// Drive one request through the router and decode the JSON body (Null if empty)
pub async fn send(
    app: &Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, token);
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .context("request failed")?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .context("failed to read response body")?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    Ok((status, value))
}
