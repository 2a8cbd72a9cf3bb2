//! SurrealDB implementation of [`RestaurantRepository`].

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use menuboard_core::error::MenuResult;
use menuboard_core::models::restaurant::{
    CreateRestaurant, DEFAULT_CURRENCY, Restaurant, RestaurantAccount, RestaurantSummary,
    UpdateRestaurant, default_categories,
};
use menuboard_core::repository::RestaurantRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;
use crate::password::hash_password;
use crate::repository::push_clearable;

const ENTITY: &str = "Restaurant";
const EMAIL_TAKEN: &str = "Email already registered";
const SLUG_TAKEN: &str = "Restaurant slug already exists";

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct RestaurantRow {
    name: String,
    email: String,
    slug: String,
    password_hash: String,
    phone: Option<String>,
    address: Option<String>,
    description: Option<String>,
    website: Option<String>,
    logo: Option<String>,
    currency: Option<String>,
    categories: Option<Vec<String>>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl RestaurantRow {
    fn into_account(self, id: Uuid) -> RestaurantAccount {
        RestaurantAccount {
            restaurant: Restaurant {
                id,
                name: self.name,
                email: self.email,
                slug: self.slug,
                phone: self.phone,
                address: self.address,
                description: self.description,
                website: self.website,
                logo: self.logo,
                currency: self.currency.unwrap_or_else(|| DEFAULT_CURRENCY.into()),
                categories: self.categories.unwrap_or_else(default_categories),
                is_active: self.is_active,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            password_hash: self.password_hash,
        }
    }
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct RestaurantRowWithId {
    record_id: String,
    name: String,
    email: String,
    slug: String,
    password_hash: String,
    phone: Option<String>,
    address: Option<String>,
    description: Option<String>,
    website: Option<String>,
    logo: Option<String>,
    currency: Option<String>,
    categories: Option<Vec<String>>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl RestaurantRowWithId {
    fn try_into_account(self) -> Result<RestaurantAccount, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Query(format!("invalid restaurant UUID: {e}")))?;
        let row = RestaurantRow {
            name: self.name,
            email: self.email,
            slug: self.slug,
            password_hash: self.password_hash,
            phone: self.phone,
            address: self.address,
            description: self.description,
            website: self.website,
            logo: self.logo,
            currency: self.currency,
            categories: self.categories,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        };
        Ok(row.into_account(id))
    }
}

/// Row struct for the per-restaurant menu size query.
#[derive(Debug, SurrealValue)]
struct ItemCountRow {
    restaurant_id: String,
    total: u64,
}

/// Pick the conflict message for a failed restaurant write.
fn write_error(err: impl std::fmt::Display) -> DbError {
    let text = err.to_string();
    let message = if text.contains("idx_restaurant_slug") {
        SLUG_TAKEN
    } else {
        EMAIL_TAKEN
    };
    DbError::from_statement(text, message)
}

/// SurrealDB implementation of the Restaurant repository.
#[derive(Clone)]
pub struct SurrealRestaurantRepository<C: Connection> {
    db: Surreal<C>,
    /// Optional server-side pepper for password hashing.
    pepper: Option<String>,
}

impl<C: Connection> SurrealRestaurantRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db, pepper: None }
    }

    pub fn with_pepper(db: Surreal<C>, pepper: String) -> Self {
        Self {
            db,
            pepper: Some(pepper),
        }
    }

    async fn find_account_where(
        &self,
        field: &'static str,
        value: &str,
    ) -> Result<RestaurantAccount, DbError> {
        let query =
            format!("SELECT meta::id(id) AS record_id, * FROM restaurant WHERE {field} = $value");

        let mut result = self
            .db
            .query(query)
            .bind(("value", value.to_string()))
            .await?;

        let rows: Vec<RestaurantRowWithId> = result.take(0)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: ENTITY.into(),
            id: format!("{field}={value}"),
        })?;

        row.try_into_account()
    }

    async fn get_account_by_id(&self, id: Uuid) -> Result<RestaurantAccount, DbError> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('restaurant', $id)")
            .bind(("id", id_str.clone()))
            .await?;

        let rows: Vec<RestaurantRow> = result.take(0)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: ENTITY.into(),
            id: id_str,
        })?;

        Ok(row.into_account(id))
    }
}

impl<C: Connection> RestaurantRepository for SurrealRestaurantRepository<C> {
    async fn create(&self, input: CreateRestaurant) -> MenuResult<Restaurant> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let password_hash = hash_password(&input.password, self.pepper.as_deref())?;

        let result = self
            .db
            .query(
                "CREATE type::record('restaurant', $id) SET \
                 name = $name, email = $email, slug = $slug, \
                 password_hash = $password_hash, \
                 is_active = true",
            )
            .bind(("id", id_str.clone()))
            .bind(("name", input.name))
            .bind(("email", input.email))
            .bind(("slug", input.slug))
            .bind(("password_hash", password_hash))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(write_error)?;

        let rows: Vec<RestaurantRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: ENTITY.into(),
            id: id_str,
        })?;

        Ok(row.into_account(id).restaurant)
    }

    async fn get_by_id(&self, id: Uuid) -> MenuResult<Restaurant> {
        Ok(self.get_account_by_id(id).await?.restaurant)
    }

    async fn get_by_slug(&self, slug: &str) -> MenuResult<Restaurant> {
        Ok(self.find_account_where("slug", slug).await?.restaurant)
    }

    async fn get_by_email(&self, email: &str) -> MenuResult<Restaurant> {
        Ok(self.find_account_where("email", email).await?.restaurant)
    }

    async fn get_account_by_email(&self, email: &str) -> MenuResult<RestaurantAccount> {
        Ok(self.find_account_where("email", email).await?)
    }

    async fn get_account_by_slug(&self, slug: &str) -> MenuResult<RestaurantAccount> {
        Ok(self.find_account_where("slug", slug).await?)
    }

    async fn update(&self, id: Uuid, input: UpdateRestaurant) -> MenuResult<Restaurant> {
        let id_str = id.to_string();

        let mut sets: Vec<String> = Vec::new();
        if input.name.is_some() {
            sets.push("name = $name".into());
        }
        if input.email.is_some() {
            sets.push("email = $email".into());
        }
        push_clearable(&mut sets, "phone", &input.phone);
        push_clearable(&mut sets, "address", &input.address);
        push_clearable(&mut sets, "description", &input.description);
        push_clearable(&mut sets, "website", &input.website);
        push_clearable(&mut sets, "logo", &input.logo);
        if input.currency.is_some() {
            sets.push("currency = $currency".into());
        }
        if input.categories.is_some() {
            sets.push("categories = $categories".into());
        }
        if input.password.is_some() {
            sets.push("password_hash = $password_hash".into());
        }
        sets.push("updated_at = time::now()".into());

        let query = format!(
            "UPDATE type::record('restaurant', $id) SET {}",
            sets.join(", ")
        );

        let mut builder = self.db.query(&query).bind(("id", id_str.clone()));

        if let Some(name) = input.name {
            builder = builder.bind(("name", name));
        }
        if let Some(email) = input.email {
            builder = builder.bind(("email", email));
        }
        if let Some(Some(phone)) = input.phone {
            builder = builder.bind(("phone", phone));
        }
        if let Some(Some(address)) = input.address {
            builder = builder.bind(("address", address));
        }
        if let Some(Some(description)) = input.description {
            builder = builder.bind(("description", description));
        }
        if let Some(Some(website)) = input.website {
            builder = builder.bind(("website", website));
        }
        if let Some(Some(logo)) = input.logo {
            builder = builder.bind(("logo", logo));
        }
        if let Some(currency) = input.currency {
            builder = builder.bind(("currency", currency));
        }
        if let Some(categories) = input.categories {
            builder = builder.bind(("categories", categories));
        }
        if let Some(password) = input.password {
            let password_hash = hash_password(&password, self.pepper.as_deref())?;
            builder = builder.bind(("password_hash", password_hash));
        }

        let result = builder.await.map_err(DbError::from)?;
        let mut result = result.check().map_err(write_error)?;

        let rows: Vec<RestaurantRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: ENTITY.into(),
            id: id_str,
        })?;

        Ok(row.into_account(id).restaurant)
    }

    async fn set_active(&self, id: Uuid, active: bool) -> MenuResult<Restaurant> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query(
                "UPDATE type::record('restaurant', $id) SET \
                 is_active = $active, updated_at = time::now()",
            )
            .bind(("id", id_str.clone()))
            .bind(("active", active))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<RestaurantRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: ENTITY.into(),
            id: id_str,
        })?;

        Ok(row.into_account(id).restaurant)
    }

    async fn toggle_active(&self, id: Uuid) -> MenuResult<Restaurant> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query(
                "UPDATE type::record('restaurant', $id) SET \
                 is_active = !is_active, updated_at = time::now()",
            )
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<RestaurantRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: ENTITY.into(),
            id: id_str,
        })?;

        Ok(row.into_account(id).restaurant)
    }

    async fn list_with_item_counts(&self) -> MenuResult<Vec<RestaurantSummary>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM restaurant \
                 ORDER BY created_at DESC; \
                 SELECT restaurant_id, count() AS total FROM menu_item \
                 GROUP BY restaurant_id;",
            )
            .await
            .map_err(DbError::from)?;

        let rows: Vec<RestaurantRowWithId> = result.take(0).map_err(DbError::from)?;
        let counts: Vec<ItemCountRow> = result.take(1).map_err(DbError::from)?;
        let counts: HashMap<String, u64> = counts
            .into_iter()
            .map(|c| (c.restaurant_id, c.total))
            .collect();

        let summaries = rows
            .into_iter()
            .map(|row| {
                let account = row.try_into_account()?;
                let menu_item_count = counts
                    .get(&account.restaurant.id.to_string())
                    .copied()
                    .unwrap_or(0);
                Ok(RestaurantSummary {
                    restaurant: account.restaurant,
                    menu_item_count,
                })
            })
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(summaries)
    }
}
