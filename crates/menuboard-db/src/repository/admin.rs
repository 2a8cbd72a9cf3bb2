//! SurrealDB implementation of [`AdminRepository`].

use chrono::{DateTime, Utc};
use menuboard_core::error::MenuResult;
use menuboard_core::models::admin::{Admin, AdminAccount, CreateAdmin};
use menuboard_core::repository::AdminRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;
use crate::password::hash_password;

const ENTITY: &str = "Admin";

#[derive(Debug, SurrealValue)]
struct AdminRow {
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl AdminRow {
    fn into_account(self, id: Uuid) -> AdminAccount {
        AdminAccount {
            admin: Admin {
                id,
                username: self.username,
                created_at: self.created_at,
            },
            password_hash: self.password_hash,
        }
    }
}

#[derive(Debug, SurrealValue)]
struct AdminRowWithId {
    record_id: String,
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

/// SurrealDB implementation of the Admin repository.
#[derive(Clone)]
pub struct SurrealAdminRepository<C: Connection> {
    db: Surreal<C>,
    pepper: Option<String>,
}

impl<C: Connection> SurrealAdminRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db, pepper: None }
    }

    pub fn with_pepper(db: Surreal<C>, pepper: String) -> Self {
        Self {
            db,
            pepper: Some(pepper),
        }
    }
}

impl<C: Connection> AdminRepository for SurrealAdminRepository<C> {
    async fn create(&self, input: CreateAdmin) -> MenuResult<Admin> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();
        let password_hash = hash_password(&input.password, self.pepper.as_deref())?;

        let result = self
            .db
            .query(
                "CREATE type::record('admin', $id) SET \
                 username = $username, password_hash = $password_hash",
            )
            .bind(("id", id_str.clone()))
            .bind(("username", input.username))
            .bind(("password_hash", password_hash))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::from_statement(e, "Admin username already exists"))?;

        let rows: Vec<AdminRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: ENTITY.into(),
            id: id_str,
        })?;

        Ok(row.into_account(id).admin)
    }

    async fn get_by_id(&self, id: Uuid) -> MenuResult<Admin> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('admin', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<AdminRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: ENTITY.into(),
            id: id_str,
        })?;

        Ok(row.into_account(id).admin)
    }

    async fn get_account_by_username(&self, username: &str) -> MenuResult<AdminAccount> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM admin \
                 WHERE username = $username",
            )
            .bind(("username", username.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<AdminRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: ENTITY.into(),
            id: format!("username={username}"),
        })?;

        let id = Uuid::parse_str(&row.record_id)
            .map_err(|e| DbError::Query(format!("invalid admin UUID: {e}")))?;

        Ok(AdminRow {
            username: row.username,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
        .into_account(id))
    }
}
