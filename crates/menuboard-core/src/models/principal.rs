//! Authenticated caller identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{MenuError, MenuResult};

/// A restaurant owner acting on their own data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantIdentity {
    pub restaurant_id: Uuid,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
    pub admin_id: Uuid,
    pub username: String,
}

/// Who is making a request, as proven by a verified access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Principal {
    Tenant(TenantIdentity),
    Admin(AdminIdentity),
}

impl Principal {
    pub fn require_tenant(&self) -> MenuResult<&TenantIdentity> {
        match self {
            Principal::Tenant(tenant) => Ok(tenant),
            Principal::Admin(_) => Err(MenuError::forbidden(
                "this operation requires a restaurant account",
            )),
        }
    }

    pub fn require_admin(&self) -> MenuResult<&AdminIdentity> {
        match self {
            Principal::Admin(admin) => Ok(admin),
            Principal::Tenant(_) => Err(MenuError::forbidden(
                "this operation requires an administrator",
            )),
        }
    }
}

impl TenantIdentity {
    /// Reject a client-supplied slug that names a different restaurant.
    pub fn ensure_slug(&self, claimed: Option<&str>) -> MenuResult<()> {
        match claimed {
            Some(slug) if slug != self.slug => Err(MenuError::forbidden(
                "cannot act on another restaurant",
            )),
            _ => Ok(()),
        }
    }
}
