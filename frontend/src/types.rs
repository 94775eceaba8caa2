//! Wire types and configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// A user as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Body of a create request.
#[derive(Debug, Serialize)]
pub struct CreateUserRequest<'a> {
    pub name: &'a str,
}

/// Where the API lives.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Base URL of the users API, read from `USERS_API_URL`
    #[serde(default = "default_api_url")]
    pub url: String,
}

impl UiConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit variable map. `None` reads the
    /// real environment.
    pub fn load_from(vars: Option<HashMap<String, String>>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("USERS_API").source(vars))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new(default_api_url())
    }
}
