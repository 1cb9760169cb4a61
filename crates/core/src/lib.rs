//! Domain types and pure logic shared by the database and API crates.
//!
//! Nothing in here touches the network or the database.

pub mod error;
pub mod naming;
pub mod pagination;
pub mod types;
pub mod validation;
