use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{CreateNote, Note, UpdateNote, DEFAULT_TAG};

/// Persistence seam for notes. Handlers own the authorization decisions;
/// implementations only move records in and out of the store.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Cheap liveness probe for the health endpoint
    async fn ping(&self) -> Result<(), DatabaseError>;

    /// All notes owned by the given user, in store order
    async fn list_for_owner(&self, owner: Uuid) -> Result<Vec<Note>, DatabaseError>;

    /// Persist a new note; the store assigns id and created_at
    async fn insert(&self, owner: Uuid, create: CreateNote) -> Result<Note, DatabaseError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, DatabaseError>;

    /// Merge the supplied fields into the note, atomically in a single
    /// statement. Returns None if the note no longer exists.
    async fn update(&self, id: Uuid, changes: &UpdateNote) -> Result<Option<Note>, DatabaseError>;

    /// Remove the note, returning its prior state
    async fn delete(&self, id: Uuid) -> Result<Option<Note>, DatabaseError>;
}

const NOTE_COLUMNS: &str = "id, title, description, tag, owner, created_at";

/// Postgres-backed repository
pub struct PgNoteRepository {
    pool: PgPool,
}

impl PgNoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_for_owner(&self, owner: Uuid) -> Result<Vec<Note>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM notes WHERE owner = $1 ORDER BY created_at",
            NOTE_COLUMNS
        );
        let notes = sqlx::query_as::<_, Note>(&sql)
            .bind(owner)
            .fetch_all(&self.pool)
            .await?;
        Ok(notes)
    }

    async fn insert(&self, owner: Uuid, create: CreateNote) -> Result<Note, DatabaseError> {
        let sql = format!(
            "INSERT INTO notes (title, description, tag, owner) VALUES ($1, $2, $3, $4) RETURNING {}",
            NOTE_COLUMNS
        );
        let note = sqlx::query_as::<_, Note>(&sql)
            .bind(create.title)
            .bind(create.description)
            .bind(create.tag.unwrap_or_else(|| DEFAULT_TAG.to_string()))
            .bind(owner)
            .fetch_one(&self.pool)
            .await?;
        Ok(note)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, DatabaseError> {
        let sql = format!("SELECT {} FROM notes WHERE id = $1", NOTE_COLUMNS);
        let note = sqlx::query_as::<_, Note>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(note)
    }

    async fn update(&self, id: Uuid, changes: &UpdateNote) -> Result<Option<Note>, DatabaseError> {
        // COALESCE leaves columns untouched where no value was supplied
        let sql = format!(
            "UPDATE notes SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                tag = COALESCE($4, tag) \
             WHERE id = $1 RETURNING {}",
            NOTE_COLUMNS
        );
        let note = sqlx::query_as::<_, Note>(&sql)
            .bind(id)
            .bind(changes.title.as_deref())
            .bind(changes.description.as_deref())
            .bind(changes.tag.as_deref())
            .fetch_optional(&self.pool)
            .await?;
        Ok(note)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Note>, DatabaseError> {
        let sql = format!("DELETE FROM notes WHERE id = $1 RETURNING {}", NOTE_COLUMNS);
        let note = sqlx::query_as::<_, Note>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(note)
    }
}
