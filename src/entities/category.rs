//! Category entity - Groups products under a named heading.
//!
//! Categories are created and edited by the operator and never deleted.
//! Products point at their category; a category does not own its products.

use crate::validation::not_blank;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Category database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique identifier assigned by the store
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display name (e.g., "Beverages")
    #[validate(
        custom(function = "not_blank"),
        length(max = 15, message = "Must be at most 15 characters")
    )]
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
}

/// Defines relationships between Category and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One category has many products
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
