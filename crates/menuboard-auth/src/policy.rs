//! Access policy: login for both principal kinds and token checks.

use menuboard_core::error::{MenuError, MenuResult};
use menuboard_core::models::admin::{Admin, CreateAdmin};
use menuboard_core::models::principal::{AdminIdentity, Principal, TenantIdentity};
use menuboard_core::models::restaurant::Restaurant;
use menuboard_core::repository::{AdminRepository, RestaurantRepository};
use tracing::{info, warn};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;
use crate::token;

/// Successful restaurant login.
#[derive(Debug)]
pub struct TenantLogin {
    /// The account, without its password.
    pub restaurant: Restaurant,
    /// Signed JWT access token.
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: u64,
}

/// Successful administrator login.
#[derive(Debug)]
pub struct AdminLogin {
    pub admin: Admin,
    pub access_token: String,
    pub expires_in: u64,
}

/// Decides whether a login succeeds and turns bearer tokens back into
/// principals.
///
/// Generic over repository implementations so that the auth layer
/// has no dependency on the database crate.
pub struct AccessPolicy<R: RestaurantRepository, A: AdminRepository> {
    restaurants: R,
    admins: A,
    config: AuthConfig,
}

impl<R: RestaurantRepository, A: AdminRepository> AccessPolicy<R, A> {
    pub fn new(restaurants: R, admins: A, config: AuthConfig) -> Self {
        Self {
            restaurants,
            admins,
            config,
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Authenticate a restaurant owner by email + password.
    ///
    /// Unknown email and wrong password are indistinguishable
    /// (`Unauthorized`). A deactivated account yields `Forbidden`
    /// before its password is checked.
    pub async fn login_tenant(&self, email: &str, password: &str) -> MenuResult<TenantLogin> {
        let email = email.trim();
        let account = match self.restaurants.get_account_by_email(email).await {
            Ok(account) => account,
            Err(MenuError::NotFound { .. }) => {
                warn!(email, "Login for unknown restaurant email");
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => return Err(e),
        };

        if !account.restaurant.is_active {
            warn!(restaurant_id = %account.restaurant.id, "Login refused for inactive restaurant");
            return Err(AuthError::AccountInactive.into());
        }

        let valid = password::verify_password(
            password,
            &account.password_hash,
            self.config.pepper.as_deref(),
        )?;
        if !valid {
            warn!(restaurant_id = %account.restaurant.id, "Restaurant login with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let principal = Principal::Tenant(TenantIdentity {
            restaurant_id: account.restaurant.id,
            slug: account.restaurant.slug.clone(),
        });
        let access_token = token::issue_access_token(&principal, &self.config)?;

        info!(
            restaurant_id = %account.restaurant.id,
            slug = %account.restaurant.slug,
            "Restaurant logged in"
        );

        Ok(TenantLogin {
            restaurant: account.restaurant,
            access_token,
            expires_in: self.config.access_token_lifetime_secs,
        })
    }

    /// Authenticate an administrator by username + password.
    pub async fn login_admin(&self, username: &str, password: &str) -> MenuResult<AdminLogin> {
        let account = match self.admins.get_account_by_username(username).await {
            Ok(account) => account,
            Err(MenuError::NotFound { .. }) => return Err(AuthError::InvalidCredentials.into()),
            Err(e) => return Err(e),
        };

        let valid = password::verify_password(
            password,
            &account.password_hash,
            self.config.pepper.as_deref(),
        )?;
        if !valid {
            warn!(username, "Admin login with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let principal = Principal::Admin(AdminIdentity {
            admin_id: account.admin.id,
            username: account.admin.username.clone(),
        });
        let access_token = token::issue_access_token(&principal, &self.config)?;

        info!(admin_id = %account.admin.id, "Admin logged in");

        Ok(AdminLogin {
            admin: account.admin,
            access_token,
            expires_in: self.config.access_token_lifetime_secs,
        })
    }

    /// Resolve a bearer token into the principal it was issued for.
    pub fn authenticate(&self, bearer: Option<&str>) -> MenuResult<Principal> {
        let raw = bearer.ok_or(AuthError::MissingToken)?;
        Ok(token::validate_access_token(raw, &self.config)?)
    }

    /// Create the administrator account if the username is not taken yet.
    ///
    /// Returns the existing admin unchanged otherwise; its password is
    /// never overwritten.
    pub async fn ensure_admin(&self, username: &str, password: &str) -> MenuResult<Admin> {
        match self.admins.get_account_by_username(username).await {
            Ok(account) => Ok(account.admin),
            Err(MenuError::NotFound { .. }) => {
                password::check_password_policy(password, self.config.min_password_length)
                    .map_err(MenuError::validation)?;
                let admin = self
                    .admins
                    .create(CreateAdmin {
                        username: username.to_string(),
                        password: password.to_string(),
                    })
                    .await?;
                info!(admin_id = %admin.id, username, "Bootstrap admin created");
                Ok(admin)
            }
            Err(e) => Err(e),
        }
    }
}
