//! Repository for the `artists` table and its `artist_genres` junction.

use sqlx::PgPool;
use discog_core::types::DbId;

use crate::models::artist::{Artist, ArtistWithGenres, CreateArtist, UpdateArtist};
use crate::models::genre::Genre;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Same columns qualified for joins through `artist_genres`.
const GENRE_COLUMNS: &str = "g.id, g.name, g.created_at, g.updated_at";

/// Provides CRUD operations for artists and their genre tags.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        let query = format!("INSERT INTO artists (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Artist>(&query)
            .bind(input.name())
            .fetch_one(pool)
            .await
    }

    /// Find an artist by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an artist by ID, enriched with its genres.
    pub async fn find_by_id_with_genres(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ArtistWithGenres>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(artist) => {
                let genres = Self::list_genres(pool, artist.id).await?;
                Ok(Some(ArtistWithGenres { artist, genres }))
            }
            None => Ok(None),
        }
    }

    /// List artists ordered by name.
    ///
    /// `name_pattern` is an `ILIKE` pattern; `None` lists everything.
    pub async fn list(
        pool: &PgPool,
        name_pattern: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM artists \
             WHERE ($1::text IS NULL OR name ILIKE $1) \
             ORDER BY lower(name), id \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(name_pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update an artist. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArtist,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET name = COALESCE($2, name) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete an artist. Genre tags go with it via `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Genres attached to an artist, ordered by name.
    pub async fn list_genres(pool: &PgPool, artist_id: DbId) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!(
            "SELECT {GENRE_COLUMNS} FROM genres g \
             JOIN artist_genres ag ON ag.genre_id = g.id \
             WHERE ag.artist_id = $1 \
             ORDER BY lower(g.name)"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }

    /// Artists tagged with a genre, ordered by name.
    pub async fn list_by_genre(
        pool: &PgPool,
        genre_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!(
            "SELECT a.id, a.name, a.created_at, a.updated_at FROM artists a \
             JOIN artist_genres ag ON ag.artist_id = a.id \
             WHERE ag.genre_id = $1 \
             ORDER BY lower(a.name), a.id \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(genre_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Replace all genre tags for an artist.
    ///
    /// Deletes existing associations, then inserts the new set, in one
    /// transaction.
    pub async fn set_genres(
        pool: &PgPool,
        artist_id: DbId,
        genre_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM artist_genres WHERE artist_id = $1")
            .bind(artist_id)
            .execute(&mut *tx)
            .await?;

        if !genre_ids.is_empty() {
            sqlx::query(
                "INSERT INTO artist_genres (artist_id, genre_id) \
                 SELECT $1, genre_id FROM unnest($2::bigint[]) AS t(genre_id)",
            )
            .bind(artist_id)
            .bind(genre_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        tracing::debug!(artist_id, count = genre_ids.len(), "Replaced artist genres");
        Ok(())
    }

    /// Tag an artist with a single genre (idempotent).
    pub async fn add_genre(pool: &PgPool, artist_id: DbId, genre_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO artist_genres (artist_id, genre_id) \
             VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(artist_id)
        .bind(genre_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove a single genre tag from an artist.
    ///
    /// Returns `true` if the association was removed.
    pub async fn remove_genre(
        pool: &PgPool,
        artist_id: DbId,
        genre_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM artist_genres WHERE artist_id = $1 AND genre_id = $2")
                .bind(artist_id)
                .bind(genre_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
