//! The users page: a list of names and a one-field form.

use std::fmt::Write;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::User;

pub const TITLE: &str = "Users";
pub const ADD_BUTTON: &str = "[Add User]";

/// Everything the page displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// The collection from the most recent successful list call
    pub users: Vec<User>,
    /// Current contents of the name input
    pub name: String,
}

/// One rendered list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem<'a> {
    /// Stable identity of the entry; the user id, not its position
    pub key: &'a str,
    pub label: &'a str,
}

impl ViewState {
    pub fn items(&self) -> Vec<ListItem<'_>> {
        self.users
            .iter()
            .map(|user| ListItem {
                key: &user.id,
                label: user.name.as_deref().unwrap_or_default(),
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Writing into a String cannot fail
        let _ = writeln!(out, "{TITLE}");
        let _ = writeln!(out, "{}", "=".repeat(TITLE.len()));
        let _ = writeln!(out, "Name: [{}] {ADD_BUTTON}", self.name);
        let _ = writeln!(out);
        for (position, item) in self.items().iter().enumerate() {
            let _ = writeln!(out, "{}. {}", position + 1, item.label);
        }

        out
    }
}

/// Handle on the page. Clones share the same state, so an add started from
/// one task is visible to every other.
#[derive(Clone)]
pub struct UsersView {
    api: ApiClient,
    state: Arc<watch::Sender<ViewState>>,
}

impl UsersView {
    pub fn new(api: ApiClient) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self {
            api,
            state: Arc::new(state),
        }
    }

    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receiver that wakes on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn render(&self) -> String {
        self.state.borrow().render()
    }

    /// Initial load when the page is first shown.
    pub async fn mount(&self) -> Result<()> {
        self.fetch_users().await
    }

    /// Input change. No validation.
    pub fn set_name(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| state.name = value);
    }

    /// Replace the displayed collection with a fresh list. On failure the
    /// current collection stays as it is.
    pub async fn fetch_users(&self) -> Result<()> {
        let users = self.api.list_users().await?;
        debug!(count = users.len(), "Replacing user list");
        self.state.send_modify(|state| state.users = users);
        Ok(())
    }

    /// Create a user from the current input, clear the input, then refresh.
    ///
    /// The input is cleared as soon as the create request has been answered,
    /// whatever the status. Only a request that never got a response leaves
    /// the input untouched. The new entry shows up once the refresh lands.
    pub async fn add_user(&self) -> Result<()> {
        let name = self.state.borrow().name.clone();

        match self.api.create_user(&name).await {
            Ok(user) => debug!(id = %user.id, "User created"),
            Err(err) if err.is_resolved() => debug!(error = %err, "Create answered with an error"),
            Err(err) => return Err(err),
        }

        self.state.send_modify(|state| state.name.clear());
        self.fetch_users().await
    }
}
