use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::db::models::User;

/// Opens the pool and makes sure the `users` table exists.
pub async fn connect(db_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(db_url)?.create_if_missing(true);

    let pool = pool_options(db_url).connect_with(options).await?;

    create_user_table(&pool).await?;

    Ok(pool)
}

fn is_in_memory(db_url: &str) -> bool {
    db_url.contains(":memory:") || db_url.contains("mode=memory")
}

pub fn pool_options(db_url: &str) -> SqlitePoolOptions {
    if !is_in_memory(db_url) {
        return SqlitePoolOptions::new().max_connections(5);
    }

    // An in-memory database lives only as long as one of its connections.
    // Shared-cache connections also lock whole tables, which the busy
    // timeout does not cover, so a single pinned connection is used.
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
}

pub async fn create_user_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Returns every stored user in whatever order SQLite yields them.
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, name FROM users")
        .fetch_all(pool)
        .await
}

pub async fn insert_user(pool: &SqlitePool, name: Option<String>) -> Result<User, sqlx::Error> {
    let user = User {
        id: Uuid::new_v4().to_string(),
        name,
    };

    sqlx::query("INSERT INTO users (id, name) VALUES (?, ?)")
        .bind(&user.id)
        .bind(&user.name)
        .execute(pool)
        .await?;

    Ok(user)
}
