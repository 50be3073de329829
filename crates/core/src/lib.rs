//! Domain types shared by the Oasis persistence and HTTP layers.
//!
//! Nothing in this crate touches the network. The closed value sets that
//! the database stores as primitives (activity category, activity
//! duration, session outcome) live here so both the repositories and the
//! request schemas validate against the same definitions.

pub mod activity;
pub mod error;
pub mod session;
pub mod types;
