//! Common test utilities
use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use tempfile::TempDir;
use users_api::{db, router, AppState};

/// A router backed by a fresh SQLite file. The directory must outlive the test.
pub async fn create_test_app() -> (Router, SqlitePool, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", temp_dir.path().join("users.db").display());

    let pool = db::connect(&url).await.unwrap();
    let app = router(Arc::new(AppState::new(pool.clone())));

    (app, pool, temp_dir)
}
