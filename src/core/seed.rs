//! Startup seeding of reference data.
//!
//! Suppliers cannot be created from the menu, so a fresh store gets them from
//! the `[[suppliers]]` entries of config.toml. Starter categories come from
//! `[[categories]]`. Entries are matched by name and only inserted when absent,
//! so seeding is safe to repeat on every start.

use crate::{
    config::settings::AppConfig,
    core::{category, supplier},
    entities,
    errors::{Error, Result},
    validation,
};
use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

/// How many rows a seeding pass inserted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Suppliers inserted
    pub suppliers: usize,
    /// Categories inserted
    pub categories: usize,
}

/// Inserts the configured suppliers and categories that are not yet present.
///
/// # Errors
/// Returns a validation error if a configured category breaks a field rule,
/// or a database error if an insert fails.
#[instrument(skip_all)]
pub async fn seed_reference_data(
    db: &DatabaseConnection,
    config: &AppConfig,
) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    for seed in &config.suppliers {
        if supplier::supplier_name_exists(db, &seed.company_name).await? {
            continue;
        }
        supplier::insert_supplier(db, seed.company_name.clone()).await?;
        summary.suppliers += 1;
    }

    for seed in &config.categories {
        if category::category_name_exists(db, &seed.name).await? {
            continue;
        }
        let candidate = entities::category::Model {
            id: 0,
            name: seed.name.clone(),
            description: seed.description.clone(),
        };
        let violations = validation::check(&candidate);
        if !violations.is_empty() {
            return Err(Error::Validation { violations });
        }
        category::insert_category(db, category::NewCategory {
            name: candidate.name,
            description: candidate.description,
        })
        .await?;
        summary.categories += 1;
    }

    info!(
        "Seeded {} supplier(s) and {} categor(ies).",
        summary.suppliers, summary.categories
    );
    Ok(summary)
}
