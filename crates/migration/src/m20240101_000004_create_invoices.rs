//! Create `invoices` table.
//!
//! One row per billed visit. Removing a client removes their invoices.
use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240101_000001_create_clients::Clients;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoices::Table)
                    .if_not_exists()
                    .col(pk_auto(Invoices::Id))
                    .col(integer(Invoices::ClientId))
                    .col(date(Invoices::Date))
                    .col(double(Invoices::TotalAmount))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoices_client_id")
                            .from(Invoices::Table, Invoices::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Invoices::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Invoices { Table, Id, ClientId, Date, TotalAmount }
