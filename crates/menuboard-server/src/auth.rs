//! Bearer-token extractors.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use menuboard_core::models::principal::{AdminIdentity, Principal, TenantIdentity};

use crate::error::ApiError;
use crate::state::AppState;

/// Any authenticated caller.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Principal);

/// A caller holding a restaurant token.
#[derive(Debug, Clone)]
pub struct TenantAuth(pub TenantIdentity);

/// A caller holding an administrator token.
#[derive(Debug, Clone)]
pub struct AdminAuth(pub AdminIdentity);

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
}

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let principal = state.policy.authenticate(bearer_token(parts))?;
        Ok(Self(principal))
    }
}

impl FromRequestParts<AppState> for TenantAuth {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Authenticated(principal) = Authenticated::from_request_parts(parts, state).await?;
        Ok(Self(principal.require_tenant()?.clone()))
    }
}

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Authenticated(principal) = Authenticated::from_request_parts(parts, state).await?;
        Ok(Self(principal.require_admin()?.clone()))
    }
}
