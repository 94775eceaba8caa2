//! Users API
//!
//! A small JSON service over a single `users` collection: list everyone, or
//! add one more entry. Storage is SQLite through `sqlx`, and the pool is
//! handed to the handlers through [`api::server::AppState`].

pub mod api;
pub mod config;
pub mod db;
pub mod error;

pub use api::server::{router, start_server, AppState};
pub use crate::config::ServerConfig;
pub use db::User;
pub use error::{AppError, Result};
