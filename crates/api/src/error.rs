use std::collections::BTreeMap;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use discog_core::error::CoreError;
use serde_json::{json, Value};
use validator::ValidationErrors;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `discog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request payload failed type or rule checks.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The body could not be read as JSON at all.
    #[error(transparent)]
    Json(#[from] JsonRejection),

    /// A path parameter did not parse, e.g. a non-numeric id.
    #[error(transparent)]
    Path(#[from] PathRejection),

    /// The query string did not parse, e.g. `?limit=abc`.
    #[error(transparent)]
    Query(#[from] QueryRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Payload errors ---
            AppError::Validation(errors) => {
                let body = json!({
                    "error": "Request validation failed",
                    "code": "VALIDATION_ERROR",
                    "fields": field_details(errors),
                });
                return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
            }
            AppError::Json(rejection) => {
                let status = rejection.status();
                let code = if status == StatusCode::UNSUPPORTED_MEDIA_TYPE {
                    "UNSUPPORTED_MEDIA_TYPE"
                } else {
                    "INVALID_JSON"
                };
                (status, code, rejection.body_text())
            }

            // --- Path and query errors ---
            AppError::Path(rejection) => {
                (rejection.status(), "INVALID_PATH", rejection.body_text())
            }
            AppError::Query(rejection) => {
                (rejection.status(), "INVALID_QUERY", rejection.body_text())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Flatten validator errors into `{ field: [{ code, message }] }`, sorted by
/// field name so responses are stable.
fn field_details(errors: &ValidationErrors) -> BTreeMap<String, Vec<Value>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let details = errs
                .iter()
                .map(|e| json!({ "code": e.code, "message": e.message }))
                .collect();
            (field.to_string(), details)
        })
        .collect()
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Foreign key violations (constraint name starting with `fk_`) map to 404,
///   since the referenced row vanished.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                // PostgreSQL unique_violation
                Some("23505") if constraint.starts_with("uq_") => {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
                // PostgreSQL foreign_key_violation
                Some("23503") if constraint.starts_with("fk_") => {
                    return (
                        StatusCode::NOT_FOUND,
                        "NOT_FOUND",
                        format!("Referenced resource not found: {constraint}"),
                    );
                }
                _ => {}
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
