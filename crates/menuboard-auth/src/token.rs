//! Signed access tokens carrying the caller's principal.
//!
//! Tokens are EdDSA (Ed25519) JWTs. They are the only session state:
//! nothing is stored server-side, and a token stays valid until `exp`.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use menuboard_core::models::principal::{AdminIdentity, Principal, TenantIdentity};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalRole {
    Tenant,
    Admin,
}

/// JWT claims embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject: restaurant ID or admin ID (UUID string).
    pub sub: String,
    pub role: PrincipalRole,
    /// Restaurant slug for tenants, username for admins.
    pub name: String,
    /// Issuer.
    pub iss: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
    /// Unique token ID (UUID string).
    pub jti: String,
}

impl AccessTokenClaims {
    pub fn into_principal(self) -> Result<Principal, AuthError> {
        let id = Uuid::parse_str(&self.sub)
            .map_err(|e| AuthError::TokenInvalid(format!("bad subject: {e}")))?;
        Ok(match self.role {
            PrincipalRole::Tenant => Principal::Tenant(TenantIdentity {
                restaurant_id: id,
                slug: self.name,
            }),
            PrincipalRole::Admin => Principal::Admin(AdminIdentity {
                admin_id: id,
                username: self.name,
            }),
        })
    }
}

/// Issue a signed EdDSA JWT for `principal`.
pub fn issue_access_token(principal: &Principal, config: &AuthConfig) -> Result<String, AuthError> {
    let (sub, role, name) = match principal {
        Principal::Tenant(t) => (t.restaurant_id, PrincipalRole::Tenant, t.slug.clone()),
        Principal::Admin(a) => (a.admin_id, PrincipalRole::Admin, a.username.clone()),
    };

    let now = Utc::now().timestamp();
    let claims = AccessTokenClaims {
        sub: sub.to_string(),
        role,
        name,
        iss: config.jwt_issuer.clone(),
        iat: now,
        exp: now + config.access_token_lifetime_secs as i64,
        jti: Uuid::new_v4().to_string(),
    };

    let key = EncodingKey::from_ed_pem(config.jwt_private_key_pem.as_bytes())
        .map_err(|e| AuthError::Crypto(format!("bad private key: {e}")))?;

    let header = Header::new(Algorithm::EdDSA);
    jsonwebtoken::encode(&header, &claims, &key)
        .map_err(|e| AuthError::Crypto(format!("JWT encode: {e}")))
}

/// Decode and verify an EdDSA JWT access token.
pub fn decode_access_token(
    token: &str,
    config: &AuthConfig,
) -> Result<AccessTokenClaims, AuthError> {
    let key = DecodingKey::from_ed_pem(config.jwt_public_key_pem.as_bytes())
        .map_err(|e| AuthError::Crypto(format!("bad public key: {e}")))?;

    let mut validation = Validation::new(Algorithm::EdDSA);
    validation.set_issuer(&[&config.jwt_issuer]);
    validation.set_required_spec_claims(&["sub", "exp", "iat", "iss"]);

    jsonwebtoken::decode::<AccessTokenClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::TokenInvalid(e.to_string()),
        })
}

/// Verify a token (signature, expiry, issuer) and return the principal
/// it proves. Purely stateless; no database lookup is performed.
pub fn validate_access_token(token: &str, config: &AuthConfig) -> Result<Principal, AuthError> {
    decode_access_token(token, config)?.into_principal()
}
