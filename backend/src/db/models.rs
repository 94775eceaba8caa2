use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    // Absent names are stored as NULL and left out of the JSON document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
