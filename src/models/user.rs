//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub nickname: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub date_of_registration: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub deleted: bool,
}

/// Data needed to register a user. `password` is plaintext until the
/// service hashes it.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub nickname: String,
    pub email: String,
    pub password: String,
}

/// Row ready for insertion
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub nickname: String,
    pub email: String,
    pub password_hash: String,
    pub date_of_registration: DateTime<Utc>,
}

/// Replacement values for an existing user
#[derive(Debug, Clone)]
pub struct UserChanges {
    pub nickname: String,
    pub email: String,
    /// New plaintext password, when the caller wants to change it
    pub password: Option<String>,
}

impl User {
    /// Whether this record still counts as an account
    pub fn is_active(&self) -> bool {
        !self.deleted
    }
}
