//! Database-specific error types and conversions.

use menuboard_core::error::MenuError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("{message}")]
    Duplicate { message: String },

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },
}

impl DbError {
    /// Classify a failed statement, recognising unique-index violations.
    ///
    /// `message` is the user-facing text reported when the failure is a
    /// duplicate key.
    pub(crate) fn from_statement(err: impl std::fmt::Display, message: &str) -> Self {
        let text = err.to_string();
        if text.contains("already contains") {
            DbError::Duplicate {
                message: message.to_string(),
            }
        } else {
            DbError::Query(text)
        }
    }
}

impl From<DbError> for MenuError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => MenuError::NotFound { entity, id },
            DbError::Duplicate { message } => MenuError::Conflict { message },
            DbError::Hash(msg) => MenuError::Crypto(msg),
            other => MenuError::Database(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_index_violation_becomes_conflict() {
        let err = DbError::from_statement(
            "Database index `idx_restaurant_email` already contains 'b@x.com'",
            "Email already registered",
        );
        let mapped: MenuError = err.into();
        assert!(matches!(mapped, MenuError::Conflict { ref message } if message == "Email already registered"));
    }

    #[test]
    fn other_failures_are_database_errors() {
        let mapped: MenuError = DbError::from_statement("parse error", "unused").into();
        assert!(matches!(mapped, MenuError::Database(_)));
    }
}
