use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::entities::{ClientManager, InvoiceManager, ProductManager, ServiceManager};
use crate::errors::ServiceError;

/// Headline counts shown on the dashboard cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    pub clients: u64,
    pub products: u64,
    pub services: u64,
    pub invoices: u64,
}

pub async fn dashboard_metrics(db: &DatabaseConnection) -> Result<DashboardMetrics, ServiceError> {
    Ok(DashboardMetrics {
        clients: ClientManager::new(db.clone()).count().await?,
        products: ProductManager::new(db.clone()).count().await?,
        services: ServiceManager::new(db.clone()).count().await?,
        invoices: InvoiceManager::new(db.clone()).count().await?,
    })
}
