//! Repository for the `genres` table.

use sqlx::PgPool;
use discog_core::types::DbId;

use crate::models::genre::{CreateGenre, Genre, UpdateGenre};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre, returning the created row.
    ///
    /// A case-insensitive duplicate name violates `uq_genres_name`.
    pub async fn create(pool: &PgPool, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        let query = format!("INSERT INTO genres (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Genre>(&query)
            .bind(input.name())
            .fetch_one(pool)
            .await
    }

    /// Find a genre by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE id = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List genres ordered by name.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM genres ORDER BY lower(name) LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a genre. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGenre,
    ) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!(
            "UPDATE genres SET name = COALESCE($2, name) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a genre, detaching it from every artist.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Return the subset of `ids` that have no matching genre row, ascending.
    pub async fn find_missing(pool: &PgPool, ids: &[DbId]) -> Result<Vec<DbId>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_scalar::<_, DbId>(
            "SELECT t.id FROM unnest($1::bigint[]) AS t(id) \
             WHERE NOT EXISTS (SELECT 1 FROM genres g WHERE g.id = t.id) \
             ORDER BY t.id",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }
}
