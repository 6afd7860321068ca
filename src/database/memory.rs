use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{CreateNote, Note, UpdateNote, DEFAULT_TAG};
use crate::database::repository::NoteRepository;

/// In-memory repository, used by the integration tests and for running the
/// service without a database. Store order is insertion order.
#[derive(Default)]
pub struct MemoryNoteRepository {
    notes: RwLock<Vec<Note>>,
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }

    async fn list_for_owner(&self, owner: Uuid) -> Result<Vec<Note>, DatabaseError> {
        let notes = self.notes.read().await;
        Ok(notes.iter().filter(|n| n.owner == owner).cloned().collect())
    }

    async fn insert(&self, owner: Uuid, create: CreateNote) -> Result<Note, DatabaseError> {
        let note = Note {
            id: Uuid::new_v4(),
            title: create.title,
            description: create.description,
            tag: create.tag.unwrap_or_else(|| DEFAULT_TAG.to_string()),
            owner,
            created_at: Utc::now(),
        };
        self.notes.write().await.push(note.clone());
        Ok(note)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, DatabaseError> {
        let notes = self.notes.read().await;
        Ok(notes.iter().find(|n| n.id == id).cloned())
    }

    async fn update(&self, id: Uuid, changes: &UpdateNote) -> Result<Option<Note>, DatabaseError> {
        let mut notes = self.notes.write().await;
        let Some(note) = notes.iter_mut().find(|n| n.id == id) else {
            return Ok(None);
        };
        if let Some(title) = &changes.title {
            note.title = title.clone();
        }
        if let Some(description) = &changes.description {
            note.description = description.clone();
        }
        if let Some(tag) = &changes.tag {
            note.tag = tag.clone();
        }
        Ok(Some(note.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Note>, DatabaseError> {
        let mut notes = self.notes.write().await;
        let position = notes.iter().position(|n| n.id == id);
        Ok(position.map(|i| notes.remove(i)))
    }
}
