//! Route tree.
//!
//! Each feature area (artists, genres) owns a submodule exposing a
//! `router()` that binds its handlers; [`api_routes`] mounts them. Handlers
//! reach persistence through the pool in [`AppState`], so a feature has no
//! dependencies beyond the state built at bootstrap.

pub mod artist;
pub mod genre;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /artists                                 list, create
/// /artists/{id}                            get, update, delete
/// /artists/{id}/genres                     list, replace
/// /artists/{id}/genres/{genre_id}          tag, untag
///
/// /genres                                  list, create
/// /genres/{id}                             get, update, delete
/// /genres/{id}/artists                     list tagged artists
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/artists", artist::router())
        .nest("/genres", genre::router())
}
