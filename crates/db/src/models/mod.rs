//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for partial updates
//!
//! DTOs derive `Deserialize` and `Validate` and are read through
//! [`discog_core::validation::parse_payload`], so handlers only ever see
//! values that passed type and rule checks.

pub mod artist;
pub mod genre;
