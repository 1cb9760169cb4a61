//! Route definitions for artists.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::artist;
use crate::state::AppState;

/// Routes mounted at `/artists`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update
/// PATCH  /{id}                   -> update
/// DELETE /{id}                   -> delete
/// GET    /{id}/genres            -> list_genres
/// PUT    /{id}/genres            -> set_genres
/// POST   /{id}/genres/{genre_id} -> add_genre
/// DELETE /{id}/genres/{genre_id} -> remove_genre
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(artist::list).post(artist::create))
        .route(
            "/{id}",
            get(artist::get_by_id)
                .put(artist::update)
                .patch(artist::update)
                .delete(artist::delete),
        )
        .route(
            "/{id}/genres",
            get(artist::list_genres).put(artist::set_genres),
        )
        .route(
            "/{id}/genres/{genre_id}",
            post(artist::add_genre).delete(artist::remove_genre),
        )
}
