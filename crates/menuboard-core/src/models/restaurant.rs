//! Restaurant (tenant) domain model.
//!
//! A restaurant is the unit of tenancy: it owns its menu items and is
//! addressed publicly by its slug.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Currency shown on a menu when the owner never picked one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Categories offered to an owner who has not customised the list.
pub const DEFAULT_CATEGORIES: [&str; 5] = [
    "Appetizers",
    "Main Course",
    "Desserts",
    "Beverages",
    "Specials",
];

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// A restaurant as exposed across the trust boundary.
///
/// Carries no password field; the stored hash only travels inside
/// [`RestaurantAccount`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// URL-safe unique public identifier.
    pub slug: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    /// Logo image URL.
    pub logo: Option<String>,
    pub currency: String,
    pub categories: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A restaurant together with its stored password hash.
///
/// Only the credential check in the auth layer consumes this.
#[derive(Debug, Clone)]
pub struct RestaurantAccount {
    pub restaurant: Restaurant,
    pub password_hash: String,
}

/// Restaurant row annotated with its menu size, for the admin listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub menu_item_count: u64,
}

/// Fields required to create a new restaurant.
#[derive(Debug, Clone)]
pub struct CreateRestaurant {
    pub name: String,
    pub email: String,
    pub slug: String,
    /// Raw password (hashed with Argon2id before storage).
    pub password: String,
}

/// Fields that can be overwritten on an existing restaurant.
///
/// `None` leaves the stored value untouched. On the optional contact
/// fields, `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateRestaurant {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub logo: Option<Option<String>>,
    pub currency: Option<String>,
    pub categories: Option<Vec<String>>,
    /// Raw replacement password (hashed before storage).
    pub password: Option<String>,
}

impl UpdateRestaurant {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.description.is_none()
            && self.website.is_none()
            && self.logo.is_none()
            && self.currency.is_none()
            && self.categories.is_none()
            && self.password.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Restaurant {
        let now = Utc::now();
        Restaurant {
            id: Uuid::new_v4(),
            name: "Bella".into(),
            email: "b@x.com".into(),
            slug: "bella-m1abc".into(),
            phone: None,
            address: None,
            description: None,
            website: None,
            logo: None,
            currency: DEFAULT_CURRENCY.into(),
            categories: default_categories(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn serializes_camel_case_without_password() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["isActive"], true);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
    }

    #[test]
    fn summary_flattens_restaurant_fields() {
        let summary = RestaurantSummary {
            restaurant: sample(),
            menu_item_count: 3,
        };
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["name"], "Bella");
        assert_eq!(json["menuItemCount"], 3);
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(UpdateRestaurant::default().is_empty());
        let update = UpdateRestaurant {
            currency: Some("EUR".into()),
            ..Default::default()
        };
        assert!(!update.is_empty());

        let clear = UpdateRestaurant {
            logo: Some(None),
            ..Default::default()
        };
        assert!(!clear.is_empty());
    }
}
