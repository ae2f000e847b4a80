//! Database configuration module.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust
//! structs, including the foreign keys products hold on categories and suppliers.

use crate::entities::{Category, Product, Supplier};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::Path;
use tracing::{debug, info};

/// Default location of the local `SQLite` file, created on first use.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/northwind.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable, or the
/// default local `SQLite` path if it is unset.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Creates the parent directory of a file-backed `SQLite` URL so the driver
/// can create the database file on first run. Other URLs are left alone.
pub fn ensure_sqlite_directory(database_url: &str) -> Result<()> {
    let Some(rest) = database_url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.contains(":memory:") {
        return Ok(());
    }
    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Opens the single connection the session holds for its whole lifetime.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database at {}", database_url);
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates any missing tables from the entity definitions.
///
/// Safe to call against an existing database: every statement is
/// `CREATE TABLE IF NOT EXISTS`.
pub async fn create_tables<C: ConnectionTrait>(db: &C) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut category_table = schema.create_table_from_entity(Category);
    let mut supplier_table = schema.create_table_from_entity(Supplier);
    let mut product_table = schema.create_table_from_entity(Product);

    category_table.if_not_exists();
    supplier_table.if_not_exists();
    product_table.if_not_exists();

    db.execute(builder.build(&category_table)).await?;
    db.execute(builder.build(&supplier_table)).await?;
    db.execute(builder.build(&product_table)).await?;

    info!("Database tables ensured.");
    Ok(())
}
