//! Menu catalog: per-restaurant menu items with ownership checks on
//! every mutation.

use menuboard_core::error::{MenuError, MenuResult};
use menuboard_core::menu_view::{self, MenuView};
use menuboard_core::models::menu_item::{
    CreateMenuItem, MenuItem, UpdateMenuItem, validate_price,
};
use menuboard_core::models::principal::TenantIdentity;
use menuboard_core::models::restaurant::Restaurant;
use menuboard_core::repository::{MenuItemRepository, RestaurantRepository};
use tracing::{info, warn};
use uuid::Uuid;

/// A new item as submitted by its owner. The price has already been
/// parsed from the wire representation.
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
}

pub struct MenuCatalog<R: RestaurantRepository, M: MenuItemRepository> {
    restaurants: R,
    items: M,
}

impl<R: RestaurantRepository, M: MenuItemRepository> MenuCatalog<R, M> {
    pub fn new(restaurants: R, items: M) -> Self {
        Self { restaurants, items }
    }

    /// Items of the restaurant at `slug`, newest first.
    pub async fn list_by_restaurant(&self, slug: &str) -> MenuResult<Vec<MenuItem>> {
        let restaurant = self.restaurants.get_by_slug(slug).await?;
        self.items.list_by_restaurant(restaurant.id).await
    }

    /// The public menu page for `slug`, optionally narrowed to one
    /// category. Deactivated restaurants stay publicly viewable.
    pub async fn public_menu(&self, slug: &str, category: Option<&str>) -> MenuResult<MenuView> {
        let restaurant = self.restaurants.get_by_slug(slug).await?;
        let items = self.items.list_by_restaurant(restaurant.id).await?;
        Ok(menu_view::build_menu_view(restaurant, items, category))
    }

    pub async fn create(&self, owner: &TenantIdentity, input: NewMenuItem) -> MenuResult<MenuItem> {
        let restaurant = self.owned_restaurant(owner).await?;

        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(MenuError::validation("Item name is required"));
        }
        let price = validate_price(input.price)?;

        let item = self
            .items
            .create(CreateMenuItem {
                restaurant_id: restaurant.id,
                name,
                description: input.description,
                price,
                category: input.category,
                image: input.image,
            })
            .await?;

        info!(item_id = %item.id, restaurant_id = %restaurant.id, "Menu item created");
        Ok(item)
    }

    pub async fn update(
        &self,
        owner: &TenantIdentity,
        item_id: Uuid,
        input: UpdateMenuItem,
    ) -> MenuResult<MenuItem> {
        self.owned_item(owner, item_id).await?;

        if let Some(name) = &input.name {
            if name.trim().is_empty() {
                return Err(MenuError::validation("Item name is required"));
            }
        }
        if let Some(price) = input.price {
            validate_price(price)?;
        }

        let item = self.items.update(item_id, input).await?;
        info!(%item_id, restaurant_id = %owner.restaurant_id, "Menu item updated");
        Ok(item)
    }

    /// Delete an owned item. A second delete of the same id is `NotFound`.
    pub async fn delete(&self, owner: &TenantIdentity, item_id: Uuid) -> MenuResult<()> {
        self.owned_item(owner, item_id).await?;
        self.items.delete(item_id).await?;
        info!(%item_id, restaurant_id = %owner.restaurant_id, "Menu item deleted");
        Ok(())
    }

    /// Resolve the caller's restaurant by slug and make sure the token
    /// still names the same record.
    async fn owned_restaurant(&self, owner: &TenantIdentity) -> MenuResult<Restaurant> {
        let restaurant = self.restaurants.get_by_slug(&owner.slug).await?;
        if restaurant.id != owner.restaurant_id {
            warn!(slug = %owner.slug, "Token does not match restaurant record");
            return Err(MenuError::forbidden("cannot act on another restaurant"));
        }
        Ok(restaurant)
    }

    async fn owned_item(&self, owner: &TenantIdentity, item_id: Uuid) -> MenuResult<MenuItem> {
        let item = self.items.get_by_id(item_id).await?;
        if item.restaurant_id != owner.restaurant_id {
            warn!(
                %item_id,
                owner = %item.restaurant_id,
                caller = %owner.restaurant_id,
                "Menu item access by another restaurant"
            );
            return Err(MenuError::forbidden("menu item belongs to another restaurant"));
        }
        Ok(item)
    }
}
