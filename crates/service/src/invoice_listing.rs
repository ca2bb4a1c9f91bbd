//! Invoice table view: each invoice alongside its client's name.

use common::pagination::{PageInfo, Pagination};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use serde::Serialize;
use tracing::error;

use models::{client, invoice};
use crate::errors::ServiceError;
use crate::record_manager::Page;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InvoiceDetail {
    pub invoice: invoice::Model,
    pub client_name: Option<String>,
}

/// Paginated like `RecordManager::list`, joined to `clients`.
pub async fn list_invoices_with_clients(db: &DatabaseConnection, page: Pagination) -> Result<Page<InvoiceDetail>, ServiceError> {
    let (page_idx, per_page) = page.checked().ok_or_else(|| {
        ServiceError::Validation("page size must be positive and the page must be in range".into())
    })?;
    let paginator = invoice::Entity::find()
        .find_also_related(client::Entity)
        .order_by_asc(invoice::Column::Id)
        .paginate(db, per_page);
    let fail = |e: sea_orm::DbErr| {
        error!(entity = "invoice", error = %e, "invoice listing failed");
        ServiceError::Db(e.to_string())
    };
    let total = paginator.num_items().await.map_err(fail)?;
    let rows = paginator.fetch_page(page_idx).await.map_err(fail)?;
    let records = rows
        .into_iter()
        .map(|(invoice, owner)| InvoiceDetail { invoice, client_name: owner.map(|c| c.name) })
        .collect();
    Ok(Page { records, info: PageInfo::new(page_idx, per_page, total) })
}
