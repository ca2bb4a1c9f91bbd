use sea_orm::entity::prelude::*;
use sea_orm::DeriveIntoActiveModel;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::invoice;
use crate::validation;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Invoice,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Invoice => Entity::has_many(invoice::Entity).into() }
    }
}

impl Related<invoice::Entity> for Entity {
    fn to() -> RelationDef { Relation::Invoice.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Client form contents.
#[derive(Clone, Debug, PartialEq, DeriveIntoActiveModel, Serialize, Deserialize)]
pub struct ClientFields {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl ClientFields {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, address: impl Into<String>) -> Self {
        Self { name: name.into(), phone: phone.into(), address: address.into() }
    }

    /// Every field goes through the character whitelist; the name must be present.
    pub fn validate(&self) -> Result<(), ModelError> {
        validation::validate_client_text("name", &self.name)?;
        validation::validate_client_text("phone", &self.phone)?;
        validation::validate_client_text("address", &self.address)?;
        validation::require_non_empty("name", &self.name)
    }
}
