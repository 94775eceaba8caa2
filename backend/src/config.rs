//! Server configuration
use std::collections::HashMap;
use std::net::SocketAddr;

use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db?mode=rwc";

/// The API always listens here; there is no override.
pub const PORT: u16 = 5000;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Storage connection target, read from `DATABASE_URL`
    #[serde(default = "default_database_url")]
    pub url: String,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit variable map instead of the
    /// process environment. `None` reads the real environment.
    pub fn load_from(vars: Option<HashMap<String, String>>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("DATABASE").source(vars))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn database_url(&self) -> &str {
        &self.url
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], PORT))
    }
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_local_database() {
        let config = ServerConfig::load_from(Some(HashMap::new())).unwrap();
        assert_eq!(config.database_url(), DEFAULT_DATABASE_URL);
    }

    #[test]
    fn test_database_url_from_environment() {
        let vars = HashMap::from([(
            "DATABASE_URL".to_string(),
            "sqlite:///var/lib/users.db".to_string(),
        )]);

        let config = ServerConfig::load_from(Some(vars)).unwrap();
        assert_eq!(config.database_url(), "sqlite:///var/lib/users.db");
    }

    #[test]
    fn test_port_is_fixed() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr().port(), 5000);
    }
}
