use axum::{extract::State, Extension, Json};

use crate::database::models::Note;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /api/notes/fetchallnotes - all notes owned by the caller
pub async fn fetch_all_notes(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state.notes.list_for_owner(user.user_id).await?;
    Ok(Json(notes))
}
