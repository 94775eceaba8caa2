//! HTTP client for the users API.

use reqwest::{Client, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::types::{CreateUserRequest, UiConfig, User};

/// Thin client over `GET` and `POST /api/users`.
///
/// No request timeout is configured: a server that never answers leaves the
/// call pending.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: UiConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .user_agent(format!("users-ui/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self) -> String {
        format!("{}/api/users", self.base_url)
    }

    /// Fetch every user.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let url = self.users_url();
        debug!(url = %url, "Fetching users");

        let response = self.http.get(&url).send().await?;
        let response = error_for_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("Failed to parse user list: {}", e)))
    }

    /// Create a user with the given name.
    pub async fn create_user(&self, name: &str) -> Result<User> {
        let url = self.users_url();
        debug!(url = %url, name = %name, "Creating user");

        let response = self
            .http
            .post(&url)
            .json(&CreateUserRequest { name })
            .send()
            .await?;
        let response = error_for_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("Failed to parse created user: {}", e)))
    }
}

async fn error_for_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(ClientError::Server {
        status: status.as_u16(),
        message,
    })
}
