//! Shared application state handed to every handler.

use std::sync::Arc;

use menuboard_auth::{AccessPolicy, AuthConfig, MenuCatalog, TenantDirectory};
use menuboard_db::repository::{
    SurrealAdminRepository, SurrealMenuItemRepository, SurrealRestaurantRepository,
};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

pub type Restaurants = SurrealRestaurantRepository<Any>;
pub type MenuItems = SurrealMenuItemRepository<Any>;
pub type Admins = SurrealAdminRepository<Any>;

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<TenantDirectory<Restaurants>>,
    pub catalog: Arc<MenuCatalog<Restaurants, MenuItems>>,
    pub policy: Arc<AccessPolicy<Restaurants, Admins>>,
    /// Origin of the public menu pages, without a trailing slash.
    pub public_base_url: Arc<str>,
}

impl AppState {
    pub fn new(db: Surreal<Any>, auth: AuthConfig, public_base_url: &str) -> Self {
        let (restaurants, admins) = match &auth.pepper {
            Some(pepper) => (
                SurrealRestaurantRepository::with_pepper(db.clone(), pepper.clone()),
                SurrealAdminRepository::with_pepper(db.clone(), pepper.clone()),
            ),
            None => (
                SurrealRestaurantRepository::new(db.clone()),
                SurrealAdminRepository::new(db.clone()),
            ),
        };
        let items = SurrealMenuItemRepository::new(db);

        Self {
            directory: Arc::new(TenantDirectory::new(restaurants.clone(), auth.clone())),
            catalog: Arc::new(MenuCatalog::new(restaurants.clone(), items)),
            policy: Arc::new(AccessPolicy::new(restaurants, admins, auth)),
            public_base_url: Arc::from(public_base_url.trim_end_matches('/')),
        }
    }

    /// Public URL of the menu page for `slug`.
    pub fn menu_url(&self, slug: &str) -> String {
        format!("{}/view-menu/{slug}", self.public_base_url)
    }
}
