//! Error types for the menuboard system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("{reason}")]
    Unauthorized { reason: String },

    #[error("{reason}")]
    Forbidden { reason: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cryptography error: {0}")]
    Crypto(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MenuError {
    pub fn not_found(entity: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden {
            reason: reason.into(),
        }
    }

    /// True for failures that must surface as a generic internal error.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Database(_) | Self::Crypto(_) | Self::Internal(_)
        )
    }
}

pub type MenuResult<T> = Result<T, MenuError>;
