//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Menu items are always listed
//! through their owning restaurant; there is no cross-tenant query.

use uuid::Uuid;

use crate::error::MenuResult;
use crate::models::{
    admin::{Admin, AdminAccount, CreateAdmin},
    menu_item::{CreateMenuItem, MenuItem, UpdateMenuItem},
    restaurant::{
        CreateRestaurant, Restaurant, RestaurantAccount, RestaurantSummary, UpdateRestaurant,
    },
};

// ---------------------------------------------------------------------------
// Tenants
// ---------------------------------------------------------------------------

pub trait RestaurantRepository: Send + Sync {
    /// Persist a new, active restaurant. Fails with `Conflict` when the
    /// email or slug is already taken.
    fn create(
        &self,
        input: CreateRestaurant,
    ) -> impl Future<Output = MenuResult<Restaurant>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = MenuResult<Restaurant>> + Send;
    fn get_by_slug(&self, slug: &str) -> impl Future<Output = MenuResult<Restaurant>> + Send;
    fn get_by_email(&self, email: &str) -> impl Future<Output = MenuResult<Restaurant>> + Send;
    /// Same lookup as [`get_by_email`](Self::get_by_email) but including
    /// the stored password hash.
    fn get_account_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = MenuResult<RestaurantAccount>> + Send;
    fn get_account_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = MenuResult<RestaurantAccount>> + Send;
    fn update(
        &self,
        id: Uuid,
        input: UpdateRestaurant,
    ) -> impl Future<Output = MenuResult<Restaurant>> + Send;
    fn set_active(
        &self,
        id: Uuid,
        active: bool,
    ) -> impl Future<Output = MenuResult<Restaurant>> + Send;
    /// Flip `is_active` in a single write.
    fn toggle_active(&self, id: Uuid) -> impl Future<Output = MenuResult<Restaurant>> + Send;
    /// Every restaurant, newest first, with its current menu item count.
    fn list_with_item_counts(
        &self,
    ) -> impl Future<Output = MenuResult<Vec<RestaurantSummary>>> + Send;
}

// ---------------------------------------------------------------------------
// Restaurant-scoped menu items
// ---------------------------------------------------------------------------

pub trait MenuItemRepository: Send + Sync {
    fn create(&self, input: CreateMenuItem) -> impl Future<Output = MenuResult<MenuItem>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = MenuResult<MenuItem>> + Send;
    fn update(
        &self,
        id: Uuid,
        input: UpdateMenuItem,
    ) -> impl Future<Output = MenuResult<MenuItem>> + Send;
    /// Hard delete. A second delete of the same id fails with `NotFound`.
    fn delete(&self, id: Uuid) -> impl Future<Output = MenuResult<()>> + Send;
    /// Items owned by one restaurant, newest first.
    fn list_by_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> impl Future<Output = MenuResult<Vec<MenuItem>>> + Send;
}

// ---------------------------------------------------------------------------
// Administrators
// ---------------------------------------------------------------------------

pub trait AdminRepository: Send + Sync {
    fn create(&self, input: CreateAdmin) -> impl Future<Output = MenuResult<Admin>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = MenuResult<Admin>> + Send;
    fn get_account_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = MenuResult<AdminAccount>> + Send;
}
