use axum::{
    body::Bytes,
    extract::{FromRequest, Request, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::api::server::AppState;
use crate::db::{repo, User};
use crate::error::Result;

/// Body of `POST /api/users`.
///
/// Only `name` is read and no value is ever refused for it: strings are kept
/// as-is, `null` or a missing field become `None`, and any other JSON value is
/// stored as its textual form. A body is only parsed when it is sent as
/// `application/json`, anything else is treated as if no body was sent.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CreateUserPayload {
    pub name: Option<String>,
}

impl CreateUserPayload {
    pub fn from_json(body: &Value) -> Self {
        Self {
            name: body.get("name").and_then(name_from_value),
        }
    }
}

fn name_from_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(name) => Some(name.clone()),
        other => Some(other.to_string()),
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

impl<S> FromRequest<S> for CreateUserPayload
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(Self::default());
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(&body).map_err(|err| {
            tracing::debug!(error = %err, "malformed JSON body");
            StatusCode::BAD_REQUEST.into_response()
        })?;

        Ok(Self::from_json(&value))
    }
}

/// GET /api/users
pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>> {
    let users = repo::list_users(&state.db).await?;
    tracing::debug!(count = users.len(), "listed users");
    Ok(Json(users))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: CreateUserPayload,
) -> Result<(StatusCode, Json<User>)> {
    let user = repo::insert_user(&state.db, payload.name).await?;
    tracing::info!(id = %user.id, "created user");
    Ok((StatusCode::CREATED, Json(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde_json::json;

    async fn extract(content_type: Option<&str>, body: &str) -> std::result::Result<CreateUserPayload, StatusCode> {
        let mut builder = Request::builder().method("POST").uri("/api/users");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let req = builder.body(Body::from(body.to_string())).unwrap();

        CreateUserPayload::from_request(req, &())
            .await
            .map_err(|rejection| rejection.status())
    }

    #[test]
    fn test_string_name_is_kept() {
        let payload = CreateUserPayload::from_json(&json!({ "name": "Alice" }));
        assert_eq!(payload.name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_missing_or_null_name_is_none() {
        assert_eq!(CreateUserPayload::from_json(&json!({})).name, None);
        assert_eq!(CreateUserPayload::from_json(&json!({ "name": null })).name, None);
        assert_eq!(CreateUserPayload::from_json(&json!(["Alice"])).name, None);
        assert_eq!(CreateUserPayload::from_json(&json!("Alice")).name, None);
    }

    #[test]
    fn test_non_string_names_are_stringified() {
        assert_eq!(
            CreateUserPayload::from_json(&json!({ "name": 42 })).name.as_deref(),
            Some("42")
        );
        assert_eq!(
            CreateUserPayload::from_json(&json!({ "name": true })).name.as_deref(),
            Some("true")
        );
        assert_eq!(
            CreateUserPayload::from_json(&json!({ "name": { "first": "Ada" } }))
                .name
                .as_deref(),
            Some(r#"{"first":"Ada"}"#)
        );
    }

    #[test]
    fn test_empty_name_is_not_rejected() {
        let payload = CreateUserPayload::from_json(&json!({ "name": "" }));
        assert_eq!(payload.name.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_extract_json_body() {
        let payload = extract(Some("application/json"), r#"{"name":"Bob"}"#)
            .await
            .unwrap();
        assert_eq!(payload.name.as_deref(), Some("Bob"));
    }

    #[tokio::test]
    async fn test_extract_accepts_charset_parameter() {
        let payload = extract(Some("application/json; charset=utf-8"), r#"{"name":"Bob"}"#)
            .await
            .unwrap();
        assert_eq!(payload.name.as_deref(), Some("Bob"));
    }

    #[tokio::test]
    async fn test_extract_ignores_non_json_bodies() {
        let payload = extract(Some("text/plain"), r#"{"name":"Bob"}"#).await.unwrap();
        assert_eq!(payload, CreateUserPayload::default());

        let payload = extract(None, r#"{"name":"Bob"}"#).await.unwrap();
        assert_eq!(payload, CreateUserPayload::default());
    }

    #[tokio::test]
    async fn test_extract_empty_json_body() {
        let payload = extract(Some("application/json"), "  \n").await.unwrap();
        assert_eq!(payload, CreateUserPayload::default());
    }

    #[tokio::test]
    async fn test_extract_malformed_json_is_bad_request() {
        let status = extract(Some("application/json"), "{\"name\":").await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
