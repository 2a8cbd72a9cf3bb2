//! Authentication error types.

use menuboard_core::error::MenuError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Your account has been deactivated. Please contact administrator.")]
    AccountInactive,

    #[error("Current password is incorrect")]
    WrongCurrentPassword,

    #[error("missing bearer token")]
    MissingToken,

    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for MenuError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AccountInactive => MenuError::Forbidden {
                reason: err.to_string(),
            },
            AuthError::InvalidCredentials
            | AuthError::WrongCurrentPassword
            | AuthError::MissingToken
            | AuthError::TokenExpired
            | AuthError::TokenInvalid(_) => MenuError::Unauthorized {
                reason: err.to_string(),
            },
            AuthError::Crypto(msg) => MenuError::Crypto(msg),
        }
    }
}
