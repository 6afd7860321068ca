use std::sync::Arc;

use notes_api::database::memory::MemoryNoteRepository;
use notes_api::database::repository::{NoteRepository, PgNoteRepository};
use notes_api::database::manager;
use notes_api::state::AppState;
use notes_api::{app, config};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting notes-api in {:?} mode", config.environment);

    let notes: Arc<dyn NoteRepository> = if std::env::var("DATABASE_URL").is_ok() {
        let pool = manager::connect()
            .await
            .unwrap_or_else(|e| panic!("database connection failed: {}", e));
        manager::prepare_schema(&pool)
            .await
            .unwrap_or_else(|e| panic!("schema preparation failed: {}", e));
        Arc::new(PgNoteRepository::new(pool))
    } else {
        tracing::warn!("DATABASE_URL not set; using in-memory note store");
        Arc::new(MemoryNoteRepository::default())
    };

    let app = app(AppState::new(notes));

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("notes-api listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
