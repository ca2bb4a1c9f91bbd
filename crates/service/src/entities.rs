//! Record-manager bindings for the four clinic tables.

use models::errors::ModelError;
use models::{client, clinic_service, invoice, product};

use crate::record_manager::{ManagedEntity, RecordManager};

pub type ClientManager = RecordManager<client::Entity>;
pub type ProductManager = RecordManager<product::Entity>;
pub type ServiceManager = RecordManager<clinic_service::Entity>;
pub type InvoiceManager = RecordManager<invoice::Entity>;

impl ManagedEntity for client::Entity {
    type Fields = client::ClientFields;
    const LABEL: &'static str = "client";

    fn id_column() -> client::Column { client::Column::Id }
    fn search_column() -> client::Column { client::Column::Name }
    fn id_of(model: &client::Model) -> i32 { model.id }
    fn validate(fields: &client::ClientFields) -> Result<(), ModelError> { fields.validate() }
}

impl ManagedEntity for product::Entity {
    type Fields = product::ProductFields;
    const LABEL: &'static str = "product";

    fn id_column() -> product::Column { product::Column::Id }
    fn search_column() -> product::Column { product::Column::Name }
    fn id_of(model: &product::Model) -> i32 { model.id }
    fn validate(fields: &product::ProductFields) -> Result<(), ModelError> { fields.validate() }
}

impl ManagedEntity for clinic_service::Entity {
    type Fields = clinic_service::ServiceFields;
    const LABEL: &'static str = "service";

    fn id_column() -> clinic_service::Column { clinic_service::Column::Id }
    fn search_column() -> clinic_service::Column { clinic_service::Column::Name }
    fn id_of(model: &clinic_service::Model) -> i32 { model.id }
    fn validate(fields: &clinic_service::ServiceFields) -> Result<(), ModelError> { fields.validate() }
}

// Invoices have no free-text column; search matches the ISO date text.
impl ManagedEntity for invoice::Entity {
    type Fields = invoice::InvoiceFields;
    const LABEL: &'static str = "invoice";

    fn id_column() -> invoice::Column { invoice::Column::Id }
    fn search_column() -> invoice::Column { invoice::Column::Date }
    fn id_of(model: &invoice::Model) -> i32 { model.id }
    fn validate(fields: &invoice::InvoiceFields) -> Result<(), ModelError> { fields.validate() }
}
