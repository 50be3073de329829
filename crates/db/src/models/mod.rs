//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Response or update DTOs where the entity needs them
//!
//! Relationships are held as foreign-key ids only; related rows are
//! fetched through the repository query functions.

pub mod activity;
pub mod flow;
pub mod session;
pub mod user;
