
/// Entity-level CRUD tests against the migrated schema
pub mod crud_tests;

/// Form field parsing and validation tests
pub mod validation_tests;

use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Fresh migrated in-memory database, private to the calling test.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    crate::db::connect_and_migrate(&DatabaseConfig::in_memory()).await
}
