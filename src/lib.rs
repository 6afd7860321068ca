use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

use state::AppState;

/// Build the full application router over the given state
pub fn app(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/auth/whoami", get(handlers::auth::whoami))
        .merge(notes_routes())
        .layer(axum::middleware::from_fn(middleware::jwt_auth_middleware));

    Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // Protected API behind JWT auth
        .merge(protected)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn notes_routes() -> Router<AppState> {
    use handlers::notes;

    Router::new()
        .route("/api/notes/fetchallnotes", get(notes::fetch_all_notes))
        .route("/api/notes/addnote", post(notes::add_note))
        .route("/api/notes/updatenote/:id", put(notes::update_note))
        .route("/api/notes/deletenote/:id", delete(notes::delete_note))
}
