//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases,
//! creating test records with sensible defaults, and driving a session from a
//! script of operator answers.

use crate::{
    console::Console,
    core::{category, product, supplier},
    entities,
    errors::Result,
    session::Session,
};
use sea_orm::DatabaseConnection;
use std::io::Cursor;
use tracing_subscriber::EnvFilter;

/// Session type driven by scripted input and capturing output in memory.
pub type ScriptedSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

/// Installs a tracing subscriber that writes through the test harness.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test category.
///
/// # Defaults
/// * `description`: `"Test category"`
pub async fn create_test_category(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::category::Model> {
    category::insert_category(db, category::NewCategory {
        name: name.to_string(),
        description: Some("Test category".to_string()),
    })
    .await
}

/// Creates a test supplier.
pub async fn create_test_supplier(
    db: &DatabaseConnection,
    company_name: &str,
) -> Result<entities::supplier::Model> {
    supplier::insert_supplier(db, company_name.to_string()).await
}

/// Creates a test product linked to the given supplier and category.
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    supplier_id: i32,
    category_id: i32,
) -> Result<entities::product::Model> {
    product::insert_product(db, product::NewProduct {
        name: name.to_string(),
        supplier_id,
        category_id,
    })
    .await
}

/// Sets up a database with one supplier and one category.
/// Returns (db, supplier, category) for product-related tests.
pub async fn setup_with_references() -> Result<(
    DatabaseConnection,
    entities::supplier::Model,
    entities::category::Model,
)> {
    let db = setup_test_db().await?;
    let supplier = create_test_supplier(&db, "Test Supplier").await?;
    let category = create_test_category(&db, "Test Category").await?;
    Ok((db, supplier, category))
}

/// Sets up a database with a supplier, a category and one product.
pub async fn setup_with_product() -> Result<(
    DatabaseConnection,
    entities::supplier::Model,
    entities::category::Model,
    entities::product::Model,
)> {
    let (db, supplier, category) = setup_with_references().await?;
    let product = create_test_product(&db, "Test Product", supplier.id, category.id).await?;
    Ok((db, supplier, category, product))
}

/// Builds a session whose console answers with `answers`, one per line.
/// Screen clearing is disabled so output can be compared verbatim.
pub fn scripted_session(db: DatabaseConnection, answers: &[&str]) -> ScriptedSession {
    let mut script = answers.join("\n");
    if !answers.is_empty() {
        script.push('\n');
    }
    Session::new(
        db,
        Console::new(Cursor::new(script.into_bytes()), Vec::new(), false),
    )
}

/// Everything the session has printed so far.
pub fn session_output(session: &mut ScriptedSession) -> String {
    String::from_utf8_lossy(session.console().output()).into_owned()
}
