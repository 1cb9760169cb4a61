//! HTTP-level integration tests for the artist endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener. Requires `DATABASE_URL`.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_empty, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_artist(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/artists",
        json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn create_genre(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/genres",
        json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Artist CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_artist_returns_201(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/artists",
        json!({"name": "  Radiohead "}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Radiohead");
    assert!(json["data"]["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_artist_includes_genres(pool: PgPool) {
    let id = create_artist(&pool, "Aphex Twin").await;
    let genre_id = create_genre(&pool, "IDM").await;
    post_empty(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/artists/{id}/genres/{genre_id}"),
    )
    .await;

    let response = get(common::build_test_app(pool), &format!("/api/v1/artists/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Aphex Twin");
    assert_eq!(json["data"]["genres"][0]["name"], "IDM");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_artist_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/artists/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_empty_body_keeps_name(pool: PgPool) {
    let id = create_artist(&pool, "Portishead").await;

    let response = patch_json(
        common::build_test_app(pool),
        &format!("/api/v1/artists/{id}"),
        json!({}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Portishead");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_artist_name(pool: PgPool) {
    let id = create_artist(&pool, "On a Friday").await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/artists/{id}"),
        json!({"name": "Radiohead"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Radiohead");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_artist_returns_404(pool: PgPool) {
    let response = patch_json(
        common::build_test_app(pool),
        "/api/v1/artists/999999",
        json!({"name": "Nobody"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_artist_returns_204(pool: PgPool) {
    let id = create_artist(&pool, "Delete Me").await;

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/artists/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent GET should 404.
    let response = get(common::build_test_app(pool), &format!("/api/v1/artists/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_artists_with_search(pool: PgPool) {
    for name in ["Bonobo", "Burial", "Boards of Canada"] {
        create_artist(&pool, name).await;
    }

    let response = get(common::build_test_app(pool.clone()), "/api/v1/artists").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);

    let response = get(common::build_test_app(pool), "/api/v1/artists?q=CANADA&limit=10").await;
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Boards of Canada");
}

// ---------------------------------------------------------------------------
// Genre tags
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replace_artist_genres(pool: PgPool) {
    let id = create_artist(&pool, "Massive Attack").await;
    let trip_hop = create_genre(&pool, "Trip Hop").await;
    let electronic = create_genre(&pool, "Electronic").await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/artists/{id}/genres"),
        json!({"genre_ids": [trip_hop, electronic, trip_hop]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/artists/{id}/genres"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["name"], "Electronic");
    assert_eq!(json["data"][1]["name"], "Trip Hop");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replace_with_unknown_genre_is_rejected(pool: PgPool) {
    let id = create_artist(&pool, "Tortoise").await;
    let post_rock = create_genre(&pool, "Post-Rock").await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/artists/{id}/genres"),
        json!({"genre_ids": [post_rock, 987654]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Unknown genre ids: 987654");

    // Nothing was attached.
    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/artists/{id}/genres"),
    )
    .await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tag_and_untag_artist(pool: PgPool) {
    let id = create_artist(&pool, "Slint").await;
    let genre_id = create_genre(&pool, "Math Rock").await;
    let uri = format!("/api/v1/artists/{id}/genres/{genre_id}");

    let response = post_empty(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = post_empty(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = delete(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tag_with_unknown_genre_returns_404(pool: PgPool) {
    let id = create_artist(&pool, "Can").await;

    let response = post_empty(
        common::build_test_app(pool),
        &format!("/api/v1/artists/{id}/genres/424242"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Genre with id 424242 not found");
}
