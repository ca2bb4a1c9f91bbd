use sea_orm::entity::prelude::*;
use sea_orm::DeriveIntoActiveModel;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation { fn def(&self) -> RelationDef { panic!("no relations") } }

impl ActiveModelBehavior for ActiveModel {}

/// Product form contents.
#[derive(Clone, Debug, PartialEq, DeriveIntoActiveModel, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
}

impl ProductFields {
    pub fn new(name: impl Into<String>, price: f64) -> Self { Self { name: name.into(), price } }

    /// Build from raw form text; both inputs are required.
    pub fn parse(name: &str, price: &str) -> Result<Self, ModelError> {
        validation::require_non_empty("product name", name)?;
        let price = validation::parse_amount("price", price)?;
        Ok(Self::new(name.trim(), price))
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        validation::require_non_empty("product name", &self.name)?;
        validation::validate_amount("price", self.price)
    }
}
