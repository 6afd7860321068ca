use axum::{extract::State, Extension, Json};

use crate::database::models::{CreateNote, Note};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// POST /api/notes/addnote - create a note owned by the caller
pub async fn add_note(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateNote>,
) -> Result<Json<Note>, ApiError> {
    payload.validate().map_err(ApiError::validation)?;

    let note = state.notes.insert(user.user_id, payload).await?;
    Ok(Json(note))
}
