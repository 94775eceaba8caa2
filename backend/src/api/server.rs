use axum::{routing::get, Router};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::users;
use crate::config::{ServerConfig, PORT};
use crate::db;
use crate::error::Result;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/users", get(users::list_users).post(users::create_user))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(config: &ServerConfig) -> Result<()> {
    // One connection pool for the lifetime of the process
    let pool = db::connect(config.database_url()).await?;
    tracing::info!("Storage connected");

    let app = router(Arc::new(AppState::new(pool)));

    let listener = TcpListener::bind(config.listen_addr()).await?;

    tracing::info!("Backend running on port {}", PORT);

    axum::serve(listener, app).await?;

    Ok(())
}
