use std::sync::Arc;

use crate::database::repository::NoteRepository;

/// Shared application state, injected into handlers instead of ambient globals
#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<dyn NoteRepository>,
}

impl AppState {
    pub fn new(notes: Arc<dyn NoteRepository>) -> Self {
        Self { notes }
    }
}
