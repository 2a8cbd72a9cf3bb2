//! Tenant directory: registration, lookup, profile updates, and status
//! changes for restaurants.

use chrono::Utc;
use menuboard_core::error::{MenuError, MenuResult};
use menuboard_core::models::restaurant::{
    CreateRestaurant, Restaurant, RestaurantSummary, UpdateRestaurant,
};
use menuboard_core::repository::RestaurantRepository;
use menuboard_core::slug;
use tracing::info;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;

/// Input for the registration flow.
#[derive(Debug, Clone)]
pub struct RegisterRestaurant {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Generated from the name when absent.
    pub slug: Option<String>,
}

/// Profile and settings changes submitted by the owner.
///
/// `Some(None)` on an optional contact field clears it.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub logo: Option<Option<String>>,
    pub currency: Option<String>,
    pub categories: Option<Vec<String>>,
    /// Both passwords must be present for a password change.
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

pub struct TenantDirectory<R: RestaurantRepository> {
    restaurants: R,
    config: AuthConfig,
}

impl<R: RestaurantRepository> TenantDirectory<R> {
    pub fn new(restaurants: R, config: AuthConfig) -> Self {
        Self {
            restaurants,
            config,
        }
    }

    /// Register a new, active restaurant.
    pub async fn register(&self, input: RegisterRestaurant) -> MenuResult<Restaurant> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(MenuError::validation("Restaurant name is required"));
        }
        let email = normalize_email(&input.email)?;
        password::check_password_policy(&input.password, self.config.min_password_length)
            .map_err(MenuError::validation)?;

        let slug = match input.slug {
            Some(s) if !slug::is_valid_slug(&s) => {
                return Err(MenuError::validation(
                    "Slug may only contain lowercase letters, digits, and dashes",
                ));
            }
            Some(s) => s,
            None => slug::generate_slug(&name, Utc::now()),
        };

        if self.exists(self.restaurants.get_by_email(&email).await)? {
            return Err(MenuError::Conflict {
                message: "Email already registered".into(),
            });
        }
        if self.exists(self.restaurants.get_by_slug(&slug).await)? {
            return Err(MenuError::Conflict {
                message: "Restaurant slug already exists".into(),
            });
        }

        let restaurant = self
            .restaurants
            .create(CreateRestaurant {
                name,
                email,
                slug,
                password: input.password,
            })
            .await?;

        info!(
            restaurant_id = %restaurant.id,
            slug = %restaurant.slug,
            "Restaurant registered"
        );
        Ok(restaurant)
    }

    pub async fn find_by_slug(&self, slug: &str) -> MenuResult<Restaurant> {
        self.restaurants.get_by_slug(slug).await
    }

    pub async fn find_by_email(&self, email: &str) -> MenuResult<Restaurant> {
        self.restaurants.get_by_email(email).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> MenuResult<Restaurant> {
        self.restaurants.get_by_id(id).await
    }

    /// Overwrite the supplied profile fields of the restaurant at `slug`.
    ///
    /// A password change needs both `current_password` and
    /// `new_password`; a wrong current password rejects the whole
    /// update and leaves the stored hash untouched.
    pub async fn update_profile(&self, slug: &str, input: ProfileUpdate) -> MenuResult<Restaurant> {
        let account = self.restaurants.get_account_by_slug(slug).await?;
        let restaurant_id = account.restaurant.id;
        let email = input.email.as_deref().map(normalize_email).transpose()?;

        let new_password = match (input.current_password, input.new_password) {
            (Some(current), Some(new)) => {
                let valid = password::verify_password(
                    &current,
                    &account.password_hash,
                    self.config.pepper.as_deref(),
                )?;
                if !valid {
                    return Err(AuthError::WrongCurrentPassword.into());
                }
                password::check_password_policy(&new, self.config.min_password_length)
                    .map_err(MenuError::validation)?;
                Some(new)
            }
            _ => None,
        };

        if let Some(email) = &email {
            if *email != account.restaurant.email {
                match self.restaurants.get_by_email(email).await {
                    Ok(other) if other.id != restaurant_id => {
                        return Err(MenuError::Conflict {
                            message: "Email already registered".into(),
                        });
                    }
                    Ok(_) | Err(MenuError::NotFound { .. }) => {}
                    Err(e) => return Err(e),
                }
            }
        }

        let update = UpdateRestaurant {
            name: input.name,
            email,
            phone: input.phone,
            address: input.address,
            description: input.description,
            website: input.website,
            logo: input.logo,
            currency: input.currency,
            categories: input.categories.map(normalize_categories),
            password: new_password,
        };

        if update.is_empty() {
            return Ok(account.restaurant);
        }

        let password_changed = update.password.is_some();
        let restaurant = self.restaurants.update(restaurant_id, update).await?;
        info!(%restaurant_id, password_changed, "Restaurant profile updated");
        Ok(restaurant)
    }

    /// Set the active flag explicitly.
    pub async fn set_active(&self, id: Uuid, active: bool) -> MenuResult<Restaurant> {
        let restaurant = self.restaurants.set_active(id, active).await?;
        info!(restaurant_id = %id, active, "Restaurant status set");
        Ok(restaurant)
    }

    /// Flip the active flag.
    pub async fn toggle_active(&self, id: Uuid) -> MenuResult<Restaurant> {
        let restaurant = self.restaurants.toggle_active(id).await?;
        info!(
            restaurant_id = %id,
            active = restaurant.is_active,
            "Restaurant status toggled"
        );
        Ok(restaurant)
    }

    /// All restaurants, newest first, with their menu sizes.
    pub async fn list_all(&self) -> MenuResult<Vec<RestaurantSummary>> {
        self.restaurants.list_with_item_counts().await
    }

    fn exists(&self, lookup: MenuResult<Restaurant>) -> MenuResult<bool> {
        match lookup {
            Ok(_) => Ok(true),
            Err(MenuError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Trimmed login email; must be non-empty and contain `@`.
fn normalize_email(raw: &str) -> MenuResult<String> {
    let email = raw.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(MenuError::validation("A valid email is required"));
    }
    Ok(email.to_string())
}

/// Trim entries, drop blanks and duplicates, keep the owner's order.
fn normalize_categories(categories: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(categories.len());
    for category in categories {
        let category = category.trim();
        if !category.is_empty() && !out.iter().any(|c| c == category) {
            out.push(category.to_string());
        }
    }
    out
}
