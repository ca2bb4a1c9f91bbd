//! Service layer for the clinic records.
//! - `record_manager`: generic paginated/searchable CRUD over one table.
//! - `browser`: per-entity list state (page cursor, search mode, selection).
//! - `income`, `dashboard`, `invoice_listing`: the read-side reports.

pub mod errors;
pub mod record_manager;
pub mod entities;
pub mod browser;
pub mod income;
pub mod dashboard;
pub mod invoice_listing;
#[cfg(test)]
pub mod test_support;

pub use browser::{BrowseMode, RecordBrowser};
pub use entities::{ClientManager, InvoiceManager, ProductManager, ServiceManager};
pub use record_manager::{ManagedEntity, Page, RecordManager};
