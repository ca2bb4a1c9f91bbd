#![cfg(test)]
use configs::DatabaseConfig;
use models::client::{self, ClientFields};
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::entities::ClientManager;

/// Fresh migrated in-memory database; each test gets its own.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_and_migrate(&DatabaseConfig::in_memory()).await
}

/// Insert `n` clients named `Client 0..n`, returned in insertion order.
pub async fn seed_clients(db: &DatabaseConnection, n: usize) -> Result<Vec<client::Model>, anyhow::Error> {
    let clients = ClientManager::new(db.clone());
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        out.push(clients.create(ClientFields::new(format!("Client {i}"), format!("555{i:04}"), "Main St")).await?);
    }
    Ok(out)
}

/// Drop a table out from under the managers so every later statement on it fails.
pub async fn drop_table(db: &DatabaseConnection, table: &str) -> Result<(), anyhow::Error> {
    db.execute_unprepared(&format!("DROP TABLE {table}")).await?;
    Ok(())
}
