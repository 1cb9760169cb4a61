//! Genre entity model and DTOs.

use discog_core::types::{DbId, Timestamp};
use discog_core::validation::normalized_name;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new genre. Names are unique ignoring case.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGenre {
    #[serde(default, deserialize_with = "normalized_name")]
    #[validate(
        required(message = "name is required"),
        length(min = 1, max = 100, message = "name must be 1-100 characters")
    )]
    pub name: Option<String>,
}

impl CreateGenre {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// DTO for renaming a genre. An absent name leaves the row unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGenre {
    #[serde(default, deserialize_with = "normalized_name")]
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,
}
