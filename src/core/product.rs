//! Product data access - Every query and write the workflows issue against
//! the products table.
//!
//! New products only ever receive a name and their two references; the
//! optional stock and pricing fields start unset and `discontinued` starts
//! false, whatever the caller had in mind.

use crate::{
    entities::{Product, product},
    errors::Result,
};
use sea_orm::{ActiveValue::Unchanged, PaginatorTrait, QueryOrder, Set, prelude::*};
use tracing::{debug, instrument};

/// Which products a listing should include
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductFilter {
    /// Every product
    All,
    /// Only products with `discontinued == true`
    Discontinued,
    /// Only products with `discontinued == false`
    Active,
}

/// Sort order for product listings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductOrder {
    /// Alphabetical by name
    Name,
    /// Ascending by id
    Id,
}

/// Fields accepted when creating a product
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewProduct {
    /// Product name
    pub name: String,
    /// Existing supplier id
    pub supplier_id: i32,
    /// Existing category id
    pub category_id: i32,
}

/// Retrieves products matching `filter` in the requested order.
#[instrument(skip(db))]
pub async fn list_products(
    db: &DatabaseConnection,
    filter: ProductFilter,
    order: ProductOrder,
) -> Result<Vec<product::Model>> {
    let mut query = Product::find();
    query = match filter {
        ProductFilter::All => query,
        ProductFilter::Discontinued => query.filter(product::Column::Discontinued.eq(true)),
        ProductFilter::Active => query.filter(product::Column::Discontinued.eq(false)),
    };
    query = match order {
        ProductOrder::Name => query.order_by_asc(product::Column::Name),
        ProductOrder::Id => query.order_by_asc(product::Column::Id),
    };
    let products = query.all(db).await?;
    debug!("Fetched {} products.", products.len());
    Ok(products)
}

/// Finds a product by its id.
pub async fn get_product(db: &DatabaseConnection, id: i32) -> Result<Option<product::Model>> {
    Product::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Finds a product by exact name.
pub async fn get_product_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<product::Model>> {
    Product::find()
        .filter(product::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Checks whether a product with this id exists.
pub async fn product_exists(db: &DatabaseConnection, id: i32) -> Result<bool> {
    let count = Product::find()
        .filter(product::Column::Id.eq(id))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Checks whether a product with exactly this name exists.
pub async fn product_name_exists(db: &DatabaseConnection, name: &str) -> Result<bool> {
    let count = Product::find()
        .filter(product::Column::Name.eq(name))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Inserts a product with every optional field unset and returns it with its
/// store-assigned id.
///
/// # Errors
/// Returns a database error if either reference does not resolve.
#[instrument(skip(db))]
pub async fn insert_product(
    db: &DatabaseConnection,
    new_product: NewProduct,
) -> Result<product::Model> {
    let product = product::ActiveModel {
        name: Set(new_product.name),
        supplier_id: Set(new_product.supplier_id),
        category_id: Set(new_product.category_id),
        quantity_per_unit: Set(None),
        unit_price: Set(None),
        units_in_stock: Set(None),
        units_on_order: Set(None),
        reorder_level: Set(None),
        discontinued: Set(false),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

/// Persists every field of `product` to the row with the same id.
///
/// # Errors
/// Returns a database error if no row has this id or a reference does not
/// resolve.
#[instrument(skip(db))]
pub async fn update_product(
    db: &DatabaseConnection,
    product: product::Model,
) -> Result<product::Model> {
    product::ActiveModel {
        id: Unchanged(product.id),
        name: Set(product.name),
        supplier_id: Set(product.supplier_id),
        category_id: Set(product.category_id),
        quantity_per_unit: Set(product.quantity_per_unit),
        unit_price: Set(product.unit_price),
        units_in_stock: Set(product.units_in_stock),
        units_on_order: Set(product.units_on_order),
        reorder_level: Set(product.reorder_level),
        discontinued: Set(product.discontinued),
    }
    .update(db)
    .await
    .map_err(Into::into)
}
