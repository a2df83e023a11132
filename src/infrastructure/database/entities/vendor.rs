//! Vendor entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Vendor row
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vendors")]
pub struct Model {
    /// Store-assigned vendor ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Vendor name (e.g., "Home Fruits")
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
