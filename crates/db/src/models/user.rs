//! User entity model and DTOs.

use oasis_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Holds the password hash and is not `Serialize`.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub hashed_password: String,
    pub display_name: String,
    pub phone_number: String,
    pub phone_verified: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user. The password must already be hashed.
///
/// Field widths are enforced by the `users` columns: email and password
/// hash up to 255 characters, display name up to 100, phone number up to 20.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub hashed_password: String,
    pub display_name: String,
    pub phone_number: String,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub display_name: Option<String>,
    pub phone_number: Option<String>,
    pub phone_verified: Option<bool>,
}
