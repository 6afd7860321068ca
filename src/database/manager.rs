use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;
use tracing::info;

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

const CREATE_NOTES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    tag TEXT NOT NULL DEFAULT 'General',
    owner UUID NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_OWNER_INDEX: &str = "CREATE INDEX IF NOT EXISTS notes_owner_idx ON notes (owner)";

/// Connect to the database named by DATABASE_URL
pub async fn connect() -> Result<PgPool, DatabaseError> {
    let url = std::env::var("DATABASE_URL")
        .map_err(|_| DatabaseError::ConfigMissing("DATABASE_URL"))?;

    let pool = PgPoolOptions::new().connect(&url).await?;
    info!("Connected database pool");
    Ok(pool)
}

/// Create the notes table and its owner index if they do not exist yet
pub async fn prepare_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query(CREATE_NOTES_TABLE).execute(pool).await?;
    sqlx::query(CREATE_OWNER_INDEX).execute(pool).await?;
    Ok(())
}
