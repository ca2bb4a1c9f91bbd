//! Migrator registering the clinic tables in dependency order.
//! `invoices` references `clients`, so it is created last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_clients;
mod m20240101_000002_create_products;
mod m20240101_000003_create_services;
mod m20240101_000004_create_invoices;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_clients::Migration),
            Box::new(m20240101_000002_create_products::Migration),
            Box::new(m20240101_000003_create_services::Migration),
            Box::new(m20240101_000004_create_invoices::Migration),
        ]
    }
}
