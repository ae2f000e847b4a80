//! Supplier data access.
//!
//! Workflows only read suppliers. Inserts exist for startup seeding.

use crate::{
    entities::{Supplier, supplier},
    errors::Result,
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};
use tracing::instrument;

/// Retrieves every supplier ordered by id.
pub async fn list_suppliers(db: &DatabaseConnection) -> Result<Vec<supplier::Model>> {
    Supplier::find()
        .order_by_asc(supplier::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Checks whether a supplier with this id exists.
pub async fn supplier_exists(db: &DatabaseConnection, id: i32) -> Result<bool> {
    let count = Supplier::find()
        .filter(supplier::Column::Id.eq(id))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Checks whether a supplier with exactly this company name exists.
pub async fn supplier_name_exists(db: &DatabaseConnection, company_name: &str) -> Result<bool> {
    let count = Supplier::find()
        .filter(supplier::Column::CompanyName.eq(company_name))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Inserts a supplier and returns it with its store-assigned id.
#[instrument(skip(db))]
pub async fn insert_supplier(
    db: &DatabaseConnection,
    company_name: String,
) -> Result<supplier::Model> {
    supplier::ActiveModel {
        company_name: Set(company_name),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_list_suppliers_by_id() -> Result<()> {
        let db = setup_test_db().await?;
        let tokyo = insert_supplier(&db, "Tokyo Traders".to_string()).await?;
        let exotic = insert_supplier(&db, "Exotic Liquids".to_string()).await?;

        let suppliers = list_suppliers(&db).await?;
        assert_eq!(suppliers, vec![tokyo, exotic]);

        Ok(())
    }

    #[tokio::test]
    async fn test_supplier_exists() -> Result<()> {
        let db = setup_test_db().await?;
        let supplier = insert_supplier(&db, "Pavlova, Ltd.".to_string()).await?;

        assert!(supplier_exists(&db, supplier.id).await?);
        assert!(!supplier_exists(&db, supplier.id + 1).await?);
        assert!(supplier_name_exists(&db, "Pavlova, Ltd.").await?);
        assert!(!supplier_name_exists(&db, "Nobody").await?);

        Ok(())
    }
}
