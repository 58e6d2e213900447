use homestock_core::{Store, StoreBuilder};
use tempfile::TempDir;

/// Helper function to create a test store with the schema initialized but
/// no default data.
pub async fn create_test_store() -> (TempDir, Store) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = StoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create store");
    (temp_dir, store)
}

/// Same as [`create_test_store`] with the default categories and locations.
pub async fn create_seeded_store() -> (TempDir, Store) {
    let (temp_dir, store) = create_test_store().await;
    store.seed_defaults().await.expect("Failed to seed store");
    (temp_dir, store)
}
