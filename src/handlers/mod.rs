pub mod auth;
pub mod notes;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - service banner
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "notes-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health - liveness probe against the note store
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.notes.ping().await {
        Ok(()) => Json(json!({ "status": "ok" })).into_response(),
        Err(e) => {
            tracing::error!("health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
                .into_response()
        }
    }
}
