//! Category data access - Every query and write the workflows issue against
//! the categories table.
//!
//! Functions here do not validate; the workflows run the field rules and the
//! name-uniqueness check before calling the insert and update functions.

use crate::{
    entities::{Category, Product, category, product},
    errors::Result,
};
use sea_orm::{ActiveValue::Unchanged, PaginatorTrait, QueryOrder, Set, prelude::*};
use tracing::{debug, instrument};

/// Sort order for category listings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryOrder {
    /// Alphabetical by name
    Name,
    /// Ascending by id
    Id,
}

/// Fields the operator supplies when creating a category
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCategory {
    /// Category name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
}

/// Retrieves every category in the requested order.
#[instrument(skip(db))]
pub async fn list_categories(
    db: &DatabaseConnection,
    order: CategoryOrder,
) -> Result<Vec<category::Model>> {
    let column = match order {
        CategoryOrder::Name => category::Column::Name,
        CategoryOrder::Id => category::Column::Id,
    };
    Category::find()
        .order_by_asc(column)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a category by its id.
pub async fn get_category(db: &DatabaseConnection, id: i32) -> Result<Option<category::Model>> {
    Category::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Finds a category by exact name.
pub async fn get_category_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<category::Model>> {
    Category::find()
        .filter(category::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a category by id together with its products, ordered by product name.
///
/// Returns `None` if no category has this id.
#[instrument(skip(db))]
pub async fn get_category_with_products(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<(category::Model, Vec<product::Model>)>> {
    let Some(category) = Category::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let products = category
        .find_related(Product)
        .order_by_asc(product::Column::Name)
        .all(db)
        .await?;
    debug!(
        "Category {} has {} related products",
        category.id,
        products.len()
    );
    Ok(Some((category, products)))
}

/// Retrieves every category ordered by id, each with its products ordered by
/// name. Categories without products are included with an empty list.
#[instrument(skip(db))]
pub async fn list_categories_with_products(
    db: &DatabaseConnection,
) -> Result<Vec<(category::Model, Vec<product::Model>)>> {
    Category::find()
        .find_with_related(Product)
        .order_by_asc(category::Column::Id)
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Checks whether a category with this id exists.
pub async fn category_exists(db: &DatabaseConnection, id: i32) -> Result<bool> {
    let count = Category::find()
        .filter(category::Column::Id.eq(id))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Checks whether a category with exactly this name exists.
pub async fn category_name_exists(db: &DatabaseConnection, name: &str) -> Result<bool> {
    let count = Category::find()
        .filter(category::Column::Name.eq(name))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Inserts a category and returns it with its store-assigned id.
#[instrument(skip(db))]
pub async fn insert_category(
    db: &DatabaseConnection,
    new_category: NewCategory,
) -> Result<category::Model> {
    let category = category::ActiveModel {
        name: Set(new_category.name),
        description: Set(new_category.description),
        ..Default::default()
    };
    category.insert(db).await.map_err(Into::into)
}

/// Persists every field of `category` to the row with the same id.
///
/// # Errors
/// Returns a database error if no row has this id.
#[instrument(skip(db))]
pub async fn update_category(
    db: &DatabaseConnection,
    category: category::Model,
) -> Result<category::Model> {
    category::ActiveModel {
        id: Unchanged(category.id),
        name: Set(category.name),
        description: Set(category.description),
    }
    .update(db)
    .await
    .map_err(Into::into)
}
