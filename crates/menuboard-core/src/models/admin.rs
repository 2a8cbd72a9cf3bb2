//! Administrator domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub admin: Admin,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct CreateAdmin {
    pub username: String,
    /// Raw password (hashed with Argon2id before storage).
    pub password: String,
}
