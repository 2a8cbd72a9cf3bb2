//! menuboard auth: password checks, signed access tokens, and the
//! services that enforce who may change which restaurant's data.

pub mod catalog;
pub mod config;
pub mod directory;
pub mod error;
pub mod password;
pub mod policy;
pub mod token;

pub use catalog::{MenuCatalog, NewMenuItem};
pub use config::AuthConfig;
pub use directory::{ProfileUpdate, RegisterRestaurant, TenantDirectory};
pub use error::AuthError;
pub use policy::{AccessPolicy, AdminLogin, TenantLogin};
pub use token::AccessTokenClaims;
