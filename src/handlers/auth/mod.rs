use axum::{Extension, Json};
use serde_json::{json, Value};

use crate::middleware::AuthUser;

/// GET /api/auth/whoami - identity of the current caller
pub async fn whoami(Extension(user): Extension<AuthUser>) -> Json<Value> {
    Json(json!({ "user_id": user.user_id }))
}
