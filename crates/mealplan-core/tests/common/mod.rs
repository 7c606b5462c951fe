use std::{sync::Arc, time::Duration};

use mealplan_core::{
    Catalog, GatewayBuilder, MemoryGateway, SqliteGateway, Wizard, WizardSession,
};
use tempfile::TempDir;

pub const DELAY: Duration = Duration::from_millis(400);

/// Helper function to create a SQLite gateway in a temporary directory
#[allow(dead_code)]
pub async fn create_test_gateway() -> (TempDir, SqliteGateway) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let gateway = GatewayBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create gateway");
    (temp_dir, gateway)
}

/// Helper function to create a session backed by an in-memory gateway
#[allow(dead_code)]
pub fn create_test_session() -> (Arc<MemoryGateway>, WizardSession) {
    let gateway = Arc::new(MemoryGateway::new());
    let session = WizardSession::new(Wizard::new(Catalog::default()), gateway.clone(), DELAY);
    (gateway, session)
}
