//! Handlers for the `/genres` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use discog_core::error::CoreError;
use discog_core::types::DbId;
use discog_db::models::genre::{CreateGenre, UpdateGenre};
use discog_db::repositories::{ArtistRepo, GenreRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ValidJson};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn genre_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Genre",
        id,
    })
}

/// GET /api/v1/genres?limit=&offset=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let genres = GenreRepo::list(&state.pool, params.limit(), params.offset()).await?;
    Ok(Json(DataResponse { data: genres }))
}

/// POST /api/v1/genres
///
/// A name already taken (ignoring case) yields 409.
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateGenre>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreRepo::create(&state.pool, &input).await?;
    tracing::info!(genre_id = genre.id, name = %genre.name, "Genre created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: genre })))
}

/// GET /api/v1/genres/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| genre_not_found(id))?;
    Ok(Json(DataResponse { data: genre }))
}

/// PUT|PATCH /api/v1/genres/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<UpdateGenre>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| genre_not_found(id))?;
    Ok(Json(DataResponse { data: genre }))
}

/// DELETE /api/v1/genres/{id}
///
/// Artists tagged with the genre lose the tag; the artists themselves stay.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if GenreRepo::delete(&state.pool, id).await? {
        tracing::info!(genre_id = id, "Genre deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(genre_not_found(id))
    }
}

/// GET /api/v1/genres/{id}/artists?limit=&offset=
pub async fn list_artists(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| genre_not_found(id))?;
    let artists =
        ArtistRepo::list_by_genre(&state.pool, id, params.limit(), params.offset()).await?;
    Ok(Json(DataResponse { data: artists }))
}
