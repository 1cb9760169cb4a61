//! Request extractors.
//!
//! Thin wrappers over axum's extractors whose rejections are [`AppError`],
//! so every malformed request gets the same JSON error body.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::Json;
use discog_core::validation::parse_payload;
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that only yields payloads which passed validation.
///
/// Malformed JSON or a wrong content type is rejected as [`AppError::Json`].
/// A body of the wrong shape or one breaking a `validator` rule becomes
/// [`AppError::Validation`].
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        let payload = parse_payload(value).inspect_err(|errors| {
            tracing::debug!(%errors, "Rejected request payload");
        })?;
        Ok(Self(payload))
    }
}

/// `axum::extract::Path` rejecting with [`AppError::Path`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// `axum::extract::Query` rejecting with [`AppError::Query`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
