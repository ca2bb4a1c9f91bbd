use sea_orm::prelude::Date;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use serde::Serialize;
use tracing::{error, instrument};

use models::{client, invoice, validation};
use crate::errors::ServiceError;

/// Inclusive date range for an income report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IncomeQuery {
    pub start: Date,
    pub end: Date,
}

impl IncomeQuery {
    pub fn new(start: Date, end: Date) -> Self { Self { start, end } }

    /// Build from the two date inputs; both are required and must be `YYYY-MM-DD`.
    pub fn parse(start: &str, end: &str) -> Result<Self, ServiceError> {
        if start.trim().is_empty() || end.trim().is_empty() {
            return Err(ServiceError::Validation("please enter both start and end dates".into()));
        }
        Ok(Self::new(validation::parse_date("start date", start)?, validation::parse_date("end date", end)?))
    }
}

/// Income billed to one client within the range.
#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize)]
pub struct IncomeRow {
    pub client_id: i32,
    pub client_name: String,
    pub total: f64,
    /// Most recent invoice date inside the range.
    pub last_date: Date,
}

/// Sum invoice totals per client for invoices dated within the range, ordered
/// by client name. An inverted range yields an empty report.
#[instrument(skip(db))]
pub async fn income_between(db: &DatabaseConnection, query: IncomeQuery) -> Result<Vec<IncomeRow>, ServiceError> {
    invoice::Entity::find()
        .select_only()
        .column_as(client::Column::Id, "client_id")
        .column_as(client::Column::Name, "client_name")
        .column_as(invoice::Column::TotalAmount.sum(), "total")
        .column_as(invoice::Column::Date.max(), "last_date")
        .join(JoinType::InnerJoin, invoice::Relation::Client.def())
        .filter(invoice::Column::Date.between(query.start, query.end))
        .group_by(client::Column::Id)
        .group_by(client::Column::Name)
        .order_by_asc(client::Column::Name)
        .into_model::<IncomeRow>()
        .all(db)
        .await
        .map_err(|e| {
            error!(error = %e, "income report failed");
            ServiceError::Db(e.to_string())
        })
}
