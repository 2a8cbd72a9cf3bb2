//! Schema definitions and migration runner for SurrealDB.
//!
//! All table definitions use SCHEMAFULL mode. UUIDs are stored as
//! strings. Uniqueness of emails, slugs, and admin usernames is enforced
//! by UNIQUE indexes so concurrent registrations cannot both succeed.

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;

use crate::error::DbError;

// -----------------------------------------------------------------------
// Migration tracking
// -----------------------------------------------------------------------

const MIGRATION_TABLE_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration \
    COLUMNS version UNIQUE;
";

#[derive(Debug, SurrealValue)]
struct MigrationRecord {
    version: u32,
}

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: SCHEMA_V1,
}];

// -----------------------------------------------------------------------
// Schema v1
// -----------------------------------------------------------------------

const SCHEMA_V1: &str = "\
-- =======================================================================
-- Restaurants (tenants)
-- =======================================================================
DEFINE TABLE restaurant SCHEMAFULL;
DEFINE FIELD name ON TABLE restaurant TYPE string;
DEFINE FIELD email ON TABLE restaurant TYPE string;
DEFINE FIELD slug ON TABLE restaurant TYPE string;
DEFINE FIELD password_hash ON TABLE restaurant TYPE string;
DEFINE FIELD phone ON TABLE restaurant TYPE option<string>;
DEFINE FIELD address ON TABLE restaurant TYPE option<string>;
DEFINE FIELD description ON TABLE restaurant TYPE option<string>;
DEFINE FIELD website ON TABLE restaurant TYPE option<string>;
DEFINE FIELD logo ON TABLE restaurant TYPE option<string>;
DEFINE FIELD currency ON TABLE restaurant TYPE option<string>;
DEFINE FIELD categories ON TABLE restaurant TYPE option<array<string>>;
DEFINE FIELD is_active ON TABLE restaurant TYPE bool DEFAULT true;
DEFINE FIELD created_at ON TABLE restaurant TYPE datetime \
    DEFAULT time::now() READONLY;
DEFINE FIELD updated_at ON TABLE restaurant TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_restaurant_email ON TABLE restaurant \
    COLUMNS email UNIQUE;
DEFINE INDEX idx_restaurant_slug ON TABLE restaurant \
    COLUMNS slug UNIQUE;

-- =======================================================================
-- Menu items (restaurant scope)
-- =======================================================================
DEFINE TABLE menu_item SCHEMAFULL;
DEFINE FIELD restaurant_id ON TABLE menu_item TYPE string READONLY;
DEFINE FIELD name ON TABLE menu_item TYPE string;
DEFINE FIELD description ON TABLE menu_item TYPE string;
DEFINE FIELD price ON TABLE menu_item TYPE float \
    ASSERT $value >= 0;
DEFINE FIELD category ON TABLE menu_item TYPE string;
DEFINE FIELD image ON TABLE menu_item TYPE option<string>;
DEFINE FIELD created_at ON TABLE menu_item TYPE datetime \
    DEFAULT time::now() READONLY;
DEFINE FIELD updated_at ON TABLE menu_item TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_menu_item_restaurant ON TABLE menu_item \
    COLUMNS restaurant_id;

-- =======================================================================
-- Administrators
-- =======================================================================
DEFINE TABLE admin SCHEMAFULL;
DEFINE FIELD username ON TABLE admin TYPE string;
DEFINE FIELD password_hash ON TABLE admin TYPE string;
DEFINE FIELD created_at ON TABLE admin TYPE datetime \
    DEFAULT time::now() READONLY;
DEFINE INDEX idx_admin_username ON TABLE admin \
    COLUMNS username UNIQUE;
";

/// Run all pending migrations against the given database.
///
/// Creates a `_migration` tracking table on first run, then applies
/// each migration whose version exceeds the current maximum.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<(), DbError> {
    db.query(MIGRATION_TABLE_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(e.to_string()))?;

    let mut result = db
        .query("SELECT version FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let records: Vec<MigrationRecord> = result.take(0)?;
    let current_version = records.first().map(|m| m.version).unwrap_or(0);

    for migration in MIGRATIONS
        .iter()
        .filter(|m| m.version > current_version)
    {
        info!(
            version = migration.version,
            name = migration.name,
            "Applying migration"
        );
        db.query(migration.sql).await?.check().map_err(|e| {
            DbError::Migration(format!(
                "v{} '{}' failed: {}",
                migration.version, migration.name, e,
            ))
        })?;

        db.query("CREATE _migration SET version = $version, name = $name")
            .bind(("version", migration.version))
            .bind(("name", migration.name))
            .await?
            .check()
            .map_err(|e| {
                DbError::Migration(format!(
                    "could not record v{}: {}",
                    migration.version, e,
                ))
            })?;
    }

    info!(
        version = MIGRATIONS.last().map(|m| m.version).unwrap_or(0),
        "Schema is up to date"
    );

    Ok(())
}

/// Returns the raw schema DDL for version 1.
pub fn schema_v1() -> &'static str {
    SCHEMA_V1
}
