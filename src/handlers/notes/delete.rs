use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// DELETE /api/notes/deletenote/:id - remove an owned note, returning its prior state
pub async fn delete_note(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let existing = state
        .notes
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found"))?;

    if existing.owner != user.user_id {
        return Err(ApiError::unauthorized("Not allowed"));
    }

    let note = state
        .notes
        .delete(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found"))?;

    Ok(Json(json!({
        "Success": "Your note has been deleted",
        "note": note,
    })))
}
