use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::models::UpdateNote;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// PUT /api/notes/updatenote/:id - merge the supplied fields into an owned note
pub async fn update_note(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(changes): Json<UpdateNote>,
) -> Result<Json<Value>, ApiError> {
    changes.validate().map_err(ApiError::validation)?;

    // Ownership check runs before the mutation; the window between the two is
    // closed well enough by the store's single-statement atomicity.
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
        .update(id, &changes)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found"))?;

    Ok(Json(json!({ "note": note })))
}
