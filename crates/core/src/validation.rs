//! Request payload validation.
//!
//! DTOs derive `Deserialize` and `Validate`. [`parse_payload`] runs both steps
//! on an untyped JSON body and reports every failure as [`ValidationErrors`]
//! keyed by top-level field, so type errors and rule violations reach the
//! client in the same shape.

use std::borrow::Cow;
use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use serde_path_to_error::{Path, Segment};
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::naming::normalize_name;
use crate::types::DbId;

/// Pseudo-field used when the request body itself has the wrong shape.
pub const BODY_FIELD: &str = "body";

/// Error code for a value of the wrong JSON type.
pub const CODE_TYPE: &str = "type";

/// Deserialize `value` into `T`, then run its `validator` rules.
///
/// The body must be a JSON object. A value of the wrong type is reported
/// against the top-level field that contains it, with code [`CODE_TYPE`].
pub fn parse_payload<T>(value: Value) -> Result<T, ValidationErrors>
where
    T: DeserializeOwned + Validate,
{
    if !value.is_object() {
        let message = format!("expected object, got {}", json_kind(&value));
        return Err(single_error(Cow::Borrowed(BODY_FIELD), message));
    }

    let payload: T = serde_path_to_error::deserialize(value)
        .map_err(|err| single_error(top_level_field(err.path()), err.inner().to_string()))?;
    payload.validate()?;
    Ok(payload)
}

/// `deserialize_with` helper for optional names.
///
/// Absent and `null` both yield `None`; strings come back whitespace-normalized.
pub fn normalized_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(|name| normalize_name(&name)))
}

/// `deserialize_with` helper for id lists. Duplicates are dropped.
pub fn unique_ids<'de, D>(deserializer: D) -> Result<Option<Vec<DbId>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<DbId>>::deserialize(deserializer)?.map(dedup_ids))
}

/// Drop repeated ids, keeping the first occurrence of each.
pub fn dedup_ids(ids: Vec<DbId>) -> Vec<DbId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

/// Human-readable JSON type name, used in error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// First map key along the error path, or [`BODY_FIELD`] for the root.
fn top_level_field(path: &Path) -> Cow<'static, str> {
    path.iter()
        .find_map(|segment| match segment {
            Segment::Map { key } => Some(Cow::Owned(key.clone())),
            _ => None,
        })
        .unwrap_or(Cow::Borrowed(BODY_FIELD))
}

fn single_error(field: Cow<'static, str>, message: String) -> ValidationErrors {
    let mut error = ValidationError::new(CODE_TYPE);
    error.message = Some(Cow::Owned(message));

    let mut errors = ValidationErrors::new();
    errors
        .errors_mut()
        .insert(field, ValidationErrorsKind::Field(vec![error]));
    errors
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
