//! Product entity - A catalog item belonging to one category and one supplier.
//!
//! Only `name`, `supplier_id` and `category_id` are supplied when a product is
//! created. The remaining fields start unset (and `discontinued` false) and are
//! filled in later through the edit workflow.

use crate::validation::not_blank;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier assigned by the store
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Name of the product (e.g., "Chai")
    #[validate(
        custom(function = "not_blank"),
        length(max = 40, message = "Must be at most 40 characters")
    )]
    pub name: String,
    /// ID of the supplier providing this product
    pub supplier_id: i32,
    /// ID of the category this product is listed under
    pub category_id: i32,
    /// Packaging description (e.g., "10 boxes x 20 bags")
    #[validate(length(max = 20, message = "Must be at most 20 characters"))]
    pub quantity_per_unit: Option<String>,
    /// Price per unit
    pub unit_price: Option<f64>,
    /// Units currently held
    #[validate(range(min = 0, message = "Must not be negative"))]
    pub units_in_stock: Option<i16>,
    /// Units ordered but not yet received
    #[validate(range(min = 0, message = "Must not be negative"))]
    pub units_on_order: Option<i16>,
    /// Stock level that should trigger a reorder
    #[validate(range(min = 0, message = "Must not be negative"))]
    pub reorder_level: Option<i16>,
    /// Whether the product is no longer sold
    pub discontinued: bool,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product belongs to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    /// Each product is provided by one supplier
    #[sea_orm(
        belongs_to = "super::supplier::Entity",
        from = "Column::SupplierId",
        to = "super::supplier::Column::Id"
    )]
    Supplier,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
