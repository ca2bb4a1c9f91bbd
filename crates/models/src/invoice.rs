use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::DeriveIntoActiveModel;
use serde::{Deserialize, Serialize};

use crate::client;
use crate::errors::ModelError;
use crate::validation;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub client_id: i32,
    pub date: Date,
    #[sea_orm(column_type = "Double")]
    pub total_amount: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Client,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Client => Entity::belongs_to(client::Entity)
                .from(Column::ClientId)
                .to(client::Column::Id)
                .into(),
        }
    }
}

impl Related<client::Entity> for Entity {
    fn to() -> RelationDef { Relation::Client.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Invoice form contents.
#[derive(Clone, Debug, PartialEq, DeriveIntoActiveModel, Serialize, Deserialize)]
pub struct InvoiceFields {
    pub client_id: i32,
    pub date: Date,
    pub total_amount: f64,
}

impl InvoiceFields {
    pub fn new(client_id: i32, date: Date, total_amount: f64) -> Self { Self { client_id, date, total_amount } }

    /// Dated with the current UTC day, as new invoices are issued.
    pub fn today(client_id: i32, total_amount: f64) -> Self {
        Self::new(client_id, Utc::now().date_naive(), total_amount)
    }

    /// Build from raw form text; client id and total are required.
    pub fn parse(client_id: &str, total_amount: &str) -> Result<Self, ModelError> {
        let client_id = validation::parse_id("client id", client_id)?;
        let total_amount = validation::parse_amount("total amount", total_amount)?;
        Ok(Self::today(client_id, total_amount))
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.client_id <= 0 {
            return Err(ModelError::Validation("client id must be a positive integer".into()));
        }
        validation::validate_amount("total amount", self.total_amount)
    }
}
