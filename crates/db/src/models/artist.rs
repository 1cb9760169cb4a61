//! Artist entity model and DTOs.

use discog_core::types::{DbId, Timestamp};
use discog_core::validation::{normalized_name, unique_ids};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::genre::Genre;

/// A row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An artist together with the genres it is tagged with.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistWithGenres {
    #[serde(flatten)]
    pub artist: Artist,
    pub genres: Vec<Genre>,
}

/// DTO for creating a new artist.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArtist {
    #[serde(default, deserialize_with = "normalized_name")]
    #[validate(
        required(message = "name is required"),
        length(min = 1, max = 255, message = "name must be 1-255 characters")
    )]
    pub name: Option<String>,
}

impl CreateArtist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// The validated name. Empty only for a DTO that skipped validation.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// DTO for updating an existing artist. Absent fields are left unchanged.
///
/// `name` may be any string when present, and `null` counts as absent. Names
/// are whitespace-normalized, so a whitespace-only name is stored as `""`,
/// which [`CreateArtist`] would reject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateArtist {
    #[serde(default, deserialize_with = "normalized_name")]
    pub name: Option<String>,
}

/// DTO replacing the full set of genres attached to an artist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct SetArtistGenres {
    #[serde(default, deserialize_with = "unique_ids")]
    #[validate(required(message = "genre_ids is required"))]
    pub genre_ids: Option<Vec<DbId>>,
}

impl SetArtistGenres {
    /// The requested genre ids, duplicates already removed.
    pub fn ids(&self) -> &[DbId] {
        self.genre_ids.as_deref().unwrap_or_default()
    }
}
