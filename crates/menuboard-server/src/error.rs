//! Mapping of domain errors onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use menuboard_core::error::MenuError;
use serde_json::json;
use tracing::error;

/// Error returned by every handler; renders as `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ApiError(pub MenuError);

pub type ApiResult<T> = Result<T, ApiError>;

impl From<MenuError> for ApiError {
    fn from(err: MenuError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            MenuError::Conflict { .. } | MenuError::Validation { .. } => StatusCode::BAD_REQUEST,
            MenuError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            MenuError::Forbidden { .. } => StatusCode::FORBIDDEN,
            MenuError::NotFound { .. } => StatusCode::NOT_FOUND,
            MenuError::Database(_) | MenuError::Crypto(_) | MenuError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(&self) -> String {
        match &self.0 {
            MenuError::NotFound { entity, .. } => format!("{entity} not found"),
            MenuError::Conflict { message } | MenuError::Validation { message } => message.clone(),
            MenuError::Unauthorized { reason } | MenuError::Forbidden { reason } => reason.clone(),
            MenuError::Database(_) | MenuError::Crypto(_) | MenuError::Internal(_) => {
                "Internal server error".into()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.0.is_internal() {
            error!(error = %self.0, "Request failed");
        }
        let status = self.status();
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_status_codes() {
        let cases = [
            (
                MenuError::Conflict {
                    message: "Email already registered".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (MenuError::validation("bad price"), StatusCode::BAD_REQUEST),
            (
                MenuError::Unauthorized {
                    reason: "Invalid credentials".into(),
                },
                StatusCode::UNAUTHORIZED,
            ),
            (MenuError::forbidden("inactive"), StatusCode::FORBIDDEN),
            (MenuError::not_found("Restaurant", "x"), StatusCode::NOT_FOUND),
            (
                MenuError::Database("connection reset".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError(err).status(), status);
        }
    }

    #[test]
    fn internal_detail_is_not_exposed() {
        let err = ApiError(MenuError::Database("ns main: table locked".into()));
        assert_eq!(err.message(), "Internal server error");

        let err = ApiError(MenuError::not_found("Restaurant", "slug=ghost"));
        assert_eq!(err.message(), "Restaurant not found");
    }
}
