//! HTTP-level tests for request payload validation.
//!
//! Every request here is rejected (or accepted) before a query would run, so
//! the router is backed by a pool that never connects.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_offline_app, patch_json, post_json, put_json, send};
use serde_json::json;

/// Assert a 400 VALIDATION_ERROR response naming `field`, returning its codes.
async fn expect_field_error(response: axum::response::Response, field: &str) -> Vec<String> {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let errors = json["fields"][field]
        .as_array()
        .unwrap_or_else(|| panic!("no errors for field '{field}' in {json}"));
    errors
        .iter()
        .map(|e| e["code"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Artist update payload
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_artist_with_numeric_name_is_rejected_on_name() {
    let response = patch_json(build_offline_app(), "/api/v1/artists/1", json!({"name": 42})).await;
    let codes = expect_field_error(response, "name").await;
    assert_eq!(codes, vec!["type"]);
}

#[tokio::test]
async fn update_artist_with_object_name_is_rejected_via_put_too() {
    let response = put_json(
        build_offline_app(),
        "/api/v1/artists/1",
        json!({"name": {"first": "Thom"}}),
    )
    .await;
    expect_field_error(response, "name").await;
}

#[tokio::test]
async fn update_artist_with_array_body_is_rejected_on_body() {
    let response = patch_json(build_offline_app(), "/api/v1/artists/1", json!(["Radiohead"])).await;
    expect_field_error(response, "body").await;
}

#[tokio::test]
async fn valid_update_payloads_pass_validation() {
    // These reach the (unreachable) database, so they fail later with 500,
    // but never with a validation error.
    for body in [json!({}), json!({"name": "Radiohead"}), json!({"name": null})] {
        let response = patch_json(build_offline_app(), "/api/v1/artists/1", body.clone()).await;
        assert_ne!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "payload {body} was rejected"
        );
        let json = body_json(response).await;
        assert_ne!(json["code"], "VALIDATION_ERROR");
    }
}

// ---------------------------------------------------------------------------
// Create payloads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_artist_without_name_is_rejected() {
    let response = post_json(build_offline_app(), "/api/v1/artists", json!({})).await;
    let codes = expect_field_error(response, "name").await;
    assert_eq!(codes, vec!["required"]);
}

#[tokio::test]
async fn create_artist_with_blank_name_fails_length_rule() {
    let response = post_json(build_offline_app(), "/api/v1/artists", json!({"name": "   "})).await;
    let codes = expect_field_error(response, "name").await;
    assert_eq!(codes, vec!["length"]);
}

#[tokio::test]
async fn create_genre_with_overlong_name_is_rejected() {
    let response = post_json(
        build_offline_app(),
        "/api/v1/genres",
        json!({"name": "g".repeat(101)}),
    )
    .await;
    expect_field_error(response, "name").await;
}

#[tokio::test]
async fn set_artist_genres_requires_integer_ids() {
    let response = put_json(
        build_offline_app(),
        "/api/v1/artists/1/genres",
        json!({"genre_ids": ["rock", 2]}),
    )
    .await;
    expect_field_error(response, "genre_ids").await;
}

// ---------------------------------------------------------------------------
// Bodies that are not JSON at all
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_json_returns_invalid_json() {
    let request = Request::builder()
        .method(Method::PATCH)
        .uri("/api/v1/artists/1")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = send(build_offline_app(), request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_JSON");
}

#[tokio::test]
async fn missing_content_type_returns_415() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/genres")
        .body(Body::from("{\"name\": \"Jazz\"}"))
        .unwrap();
    let response = send(build_offline_app(), request).await;

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNSUPPORTED_MEDIA_TYPE");
}
