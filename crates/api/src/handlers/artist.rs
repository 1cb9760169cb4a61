//! Handlers for the `/artists` resource and its genre tags.
//!
//! Every body-carrying handler takes its DTO through [`ValidJson`], so a
//! malformed payload is rejected before any repository is touched.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use discog_core::error::CoreError;
use discog_core::naming::contains_pattern;
use discog_core::types::DbId;
use discog_db::models::artist::{Artist, CreateArtist, SetArtistGenres, UpdateArtist};
use discog_db::repositories::{ArtistRepo, GenreRepo};
use discog_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ValidJson};
use crate::query::ArtistListParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn artist_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Artist",
        id,
    })
}

/// Load an artist or fail with 404.
async fn ensure_artist_exists(pool: &DbPool, id: DbId) -> AppResult<Artist> {
    ArtistRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| artist_not_found(id))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/artists?q=&limit=&offset=
///
/// List artists by name, optionally filtered by a case-insensitive substring.
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ArtistListParams>,
) -> AppResult<impl IntoResponse> {
    let pattern = params.search().map(contains_pattern);
    let page = params.pagination();
    let artists =
        ArtistRepo::list(&state.pool, pattern.as_deref(), page.limit(), page.offset()).await?;
    Ok(Json(DataResponse { data: artists }))
}

/// POST /api/v1/artists
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateArtist>,
) -> AppResult<impl IntoResponse> {
    let artist = ArtistRepo::create(&state.pool, &input).await?;
    tracing::info!(artist_id = artist.id, name = %artist.name, "Artist created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: artist })))
}

/// GET /api/v1/artists/{id}
///
/// Returns the artist with its genres inlined.
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let artist = ArtistRepo::find_by_id_with_genres(&state.pool, id)
        .await?
        .ok_or_else(|| artist_not_found(id))?;
    Ok(Json(DataResponse { data: artist }))
}

/// PUT|PATCH /api/v1/artists/{id}
///
/// Partial update: fields absent from the body keep their stored value.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<UpdateArtist>,
) -> AppResult<impl IntoResponse> {
    let artist = ArtistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| artist_not_found(id))?;
    Ok(Json(DataResponse { data: artist }))
}

/// DELETE /api/v1/artists/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if ArtistRepo::delete(&state.pool, id).await? {
        tracing::info!(artist_id = id, "Artist deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(artist_not_found(id))
    }
}

/// GET /api/v1/artists/{id}/genres
pub async fn list_genres(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_artist_exists(&state.pool, id).await?;
    let genres = ArtistRepo::list_genres(&state.pool, id).await?;
    Ok(Json(DataResponse { data: genres }))
}

/// PUT /api/v1/artists/{id}/genres
///
/// Replace the artist's genre set. Every id must name an existing genre;
/// otherwise nothing changes and the unknown ids are reported.
pub async fn set_genres(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<SetArtistGenres>,
) -> AppResult<impl IntoResponse> {
    ensure_artist_exists(&state.pool, id).await?;

    let missing = GenreRepo::find_missing(&state.pool, input.ids()).await?;
    if !missing.is_empty() {
        let ids: Vec<String> = missing.iter().map(ToString::to_string).collect();
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown genre ids: {}",
            ids.join(", ")
        ))));
    }

    ArtistRepo::set_genres(&state.pool, id, input.ids()).await?;
    let genres = ArtistRepo::list_genres(&state.pool, id).await?;
    Ok(Json(DataResponse { data: genres }))
}

/// POST /api/v1/artists/{id}/genres/{genre_id}
///
/// Tag an artist with a genre. Tagging twice is a no-op.
pub async fn add_genre(
    State(state): State<AppState>,
    ApiPath((id, genre_id)): ApiPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    ensure_artist_exists(&state.pool, id).await?;
    GenreRepo::find_by_id(&state.pool, genre_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Genre",
            id: genre_id,
        }))?;

    ArtistRepo::add_genre(&state.pool, id, genre_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/artists/{id}/genres/{genre_id}
pub async fn remove_genre(
    State(state): State<AppState>,
    ApiPath((id, genre_id)): ApiPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if ArtistRepo::remove_genre(&state.pool, id, genre_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Genre tag",
            id: genre_id,
        }))
    }
}
