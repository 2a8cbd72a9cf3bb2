//! SurrealDB implementation of [`MenuItemRepository`].

use chrono::{DateTime, Utc};
use menuboard_core::error::MenuResult;
use menuboard_core::models::menu_item::{CreateMenuItem, MenuItem, UpdateMenuItem};
use menuboard_core::repository::MenuItemRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;
use crate::repository::push_clearable;

const ENTITY: &str = "Menu item";

#[derive(Debug, SurrealValue)]
struct MenuItemRow {
    restaurant_id: String,
    name: String,
    description: String,
    price: f64,
    category: String,
    image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl MenuItemRow {
    fn into_menu_item(self, id: Uuid) -> Result<MenuItem, DbError> {
        let restaurant_id = Uuid::parse_str(&self.restaurant_id)
            .map_err(|e| DbError::Query(format!("invalid restaurant UUID: {e}")))?;
        Ok(MenuItem {
            id,
            restaurant_id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            image: self.image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, SurrealValue)]
struct MenuItemRowWithId {
    record_id: String,
    restaurant_id: String,
    name: String,
    description: String,
    price: f64,
    category: String,
    image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl MenuItemRowWithId {
    fn try_into_menu_item(self) -> Result<MenuItem, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Query(format!("invalid UUID: {e}")))?;
        MenuItemRow {
            restaurant_id: self.restaurant_id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            image: self.image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
        .into_menu_item(id)
    }
}

/// SurrealDB implementation of the MenuItem repository.
#[derive(Clone)]
pub struct SurrealMenuItemRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealMenuItemRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> MenuItemRepository for SurrealMenuItemRepository<C> {
    async fn create(&self, input: CreateMenuItem) -> MenuResult<MenuItem> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('menu_item', $id) SET \
                 restaurant_id = $restaurant_id, \
                 name = $name, description = $description, \
                 price = $price, category = $category, \
                 image = $image",
            )
            .bind(("id", id_str.clone()))
            .bind(("restaurant_id", input.restaurant_id.to_string()))
            .bind(("name", input.name))
            .bind(("description", input.description))
            .bind(("price", input.price))
            .bind(("category", input.category))
            .bind(("image", input.image))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<MenuItemRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: ENTITY.into(),
            id: id_str,
        })?;

        Ok(row.into_menu_item(id)?)
    }

    async fn get_by_id(&self, id: Uuid) -> MenuResult<MenuItem> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('menu_item', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<MenuItemRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: ENTITY.into(),
            id: id_str,
        })?;

        Ok(row.into_menu_item(id)?)
    }

    async fn update(&self, id: Uuid, input: UpdateMenuItem) -> MenuResult<MenuItem> {
        let id_str = id.to_string();

        let mut sets: Vec<String> = Vec::new();
        if input.name.is_some() {
            sets.push("name = $name".into());
        }
        if input.description.is_some() {
            sets.push("description = $description".into());
        }
        if input.price.is_some() {
            sets.push("price = $price".into());
        }
        if input.category.is_some() {
            sets.push("category = $category".into());
        }
        push_clearable(&mut sets, "image", &input.image);
        sets.push("updated_at = time::now()".into());

        let query = format!(
            "UPDATE type::record('menu_item', $id) SET {}",
            sets.join(", ")
        );

        let mut builder = self.db.query(&query).bind(("id", id_str.clone()));

        if let Some(name) = input.name {
            builder = builder.bind(("name", name));
        }
        if let Some(description) = input.description {
            builder = builder.bind(("description", description));
        }
        if let Some(price) = input.price {
            builder = builder.bind(("price", price));
        }
        if let Some(category) = input.category {
            builder = builder.bind(("category", category));
        }
        if let Some(Some(image)) = input.image {
            builder = builder.bind(("image", image));
        }

        let result = builder.await.map_err(DbError::from)?;
        let mut result = result
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<MenuItemRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: ENTITY.into(),
            id: id_str,
        })?;

        Ok(row.into_menu_item(id)?)
    }

    async fn delete(&self, id: Uuid) -> MenuResult<()> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("DELETE type::record('menu_item', $id) RETURN BEFORE")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<MenuItemRow> = result.take(0).map_err(DbError::from)?;
        if rows.is_empty() {
            return Err(DbError::NotFound {
                entity: ENTITY.into(),
                id: id_str,
            }
            .into());
        }

        Ok(())
    }

    async fn list_by_restaurant(&self, restaurant_id: Uuid) -> MenuResult<Vec<MenuItem>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM menu_item \
                 WHERE restaurant_id = $restaurant_id \
                 ORDER BY created_at DESC",
            )
            .bind(("restaurant_id", restaurant_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<MenuItemRowWithId> = result.take(0).map_err(DbError::from)?;

        let items = rows
            .into_iter()
            .map(|row| row.try_into_menu_item())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(items)
    }
}
