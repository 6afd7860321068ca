use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::FieldError;

/// Tag applied when a note is created without one
pub const DEFAULT_TAG: &str = "General";

const MIN_TITLE_CHARS: usize = 3;
const MIN_DESCRIPTION_CHARS: usize = 5;

/// A user-owned text note. The owner is set once at creation and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tag: String,
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a note
#[derive(Debug, Deserialize)]
pub struct CreateNote {
    pub title: String,
    pub description: String,
    pub tag: Option<String>,
}

impl CreateNote {
    /// Length constraints apply only at creation
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.title.chars().count() < MIN_TITLE_CHARS {
            errors.push(FieldError::new(
                "title",
                "Enter a valid title (minimum 3 characters)",
            ));
        }
        if self.description.chars().count() < MIN_DESCRIPTION_CHARS {
            errors.push(FieldError::new(
                "description",
                "Description must be at least 5 characters",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Request body for a partial update. Absent fields are left unchanged;
/// a field that is present but empty is rejected rather than silently ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tag: Option<String>,
}

impl UpdateNote {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("tag", &self.tag),
        ] {
            if let Some(v) = value {
                if v.is_empty() {
                    errors.push(FieldError::new(field, "Must not be empty when supplied"));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
