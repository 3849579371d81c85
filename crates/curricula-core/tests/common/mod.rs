use std::{path::PathBuf, time::Duration};

use curricula_core::{Planner, PlannerBuilder};
use tempfile::TempDir;

/// Location of the bundled demo catalog.
pub fn demo_catalog_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/catalog")
}

/// Helper function to create a test planner over a database in `temp_dir`
#[allow(dead_code)]
pub async fn create_test_planner(temp_dir: &TempDir, user: &str) -> Planner {
    PlannerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_catalog_dir(Some(demo_catalog_dir()))
        .with_user(Some(user))
        .with_debounce(Duration::from_millis(20))
        .build()
        .await
        .expect("Failed to create planner")
}
