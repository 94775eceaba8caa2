//! Users UI
//!
//! A terminal rendition of the users page: it loads the list when shown,
//! keeps a single name field, and on "add" posts the name, clears the field
//! and reloads the list.

pub mod client;
pub mod error;
pub mod terminal;
pub mod types;
pub mod view;

pub use client::ApiClient;
pub use error::{ClientError, Result};
pub use types::{UiConfig, User};
pub use view::{UsersView, ViewState};
