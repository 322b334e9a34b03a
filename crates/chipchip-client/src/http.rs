//! Blocking HTTP adapter for the ChipChip REST API.

use std::time::Duration;

use chipchip_types::{CurrentUser, ListParams, NewPost, Post, PostPage, PostUpdate};
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::traits::ChirpApi;
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct HttpApiOptions {
    /// Base URL including the API prefix, e.g. `http://localhost:8000/api/v1`
    pub base_url: String,
    /// Bearer token sent with every request
    pub token: Option<String>,
    pub timeout: Duration,
}

impl HttpApiOptions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct HttpApi {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpApi {
    pub fn new(options: HttpApiOptions) -> Result<Self> {
        let http = Client::builder()
            .timeout(options.timeout)
            .user_agent(concat!("chipchip/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            token: options.token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = self.authorized(request).send()?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), url = %response.url(), "api response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        Err(error_from_status(status, &body))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, params: Option<ListParams>) -> Result<T> {
        let mut request = self.http.get(self.endpoint(path));
        if let Some(params) = params {
            request = request.query(&[("skip", params.skip), ("limit", params.limit)]);
        }
        let response = self.send(request)?;
        Ok(response.json()?)
    }
}

impl ChirpApi for HttpApi {
    fn id(&self) -> &'static str {
        "http"
    }

    fn current_user(&self) -> Result<Option<CurrentUser>> {
        if self.token.is_none() {
            return Ok(None);
        }

        match self.get_json::<CurrentUser>("users/me", None) {
            Ok(user) => Ok(Some(user)),
            Err(Error::Unauthorized(msg)) => {
                tracing::warn!("token rejected by server: {}", msg);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn list_posts(&self, params: ListParams) -> Result<PostPage> {
        self.get_json("tweets/", Some(params))
    }

    fn list_my_posts(&self, params: ListParams) -> Result<PostPage> {
        self.get_json("tweets/my", Some(params))
    }

    fn get_post(&self, id: Uuid) -> Result<Post> {
        self.get_json(&format!("tweets/{}", id), None)
    }

    fn create_post(&self, content: &str) -> Result<Post> {
        let body = NewPost {
            content: content.to_string(),
        };
        let response = self.send(self.http.post(self.endpoint("tweets/")).json(&body))?;
        Ok(response.json()?)
    }

    fn update_post(&self, id: Uuid, content: &str) -> Result<Post> {
        let body = PostUpdate {
            content: Some(content.to_string()),
        };
        let url = self.endpoint(&format!("tweets/{}", id));
        let response = self.send(self.http.put(url).json(&body))?;
        Ok(response.json()?)
    }

    fn delete_post(&self, id: Uuid) -> Result<()> {
        self.send(self.http.delete(self.endpoint(&format!("tweets/{}", id))))?;
        Ok(())
    }
}

/// Map a non-success response to an [`Error`].
pub fn error_from_status(status: StatusCode, body: &str) -> Error {
    let message = extract_detail(body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    });

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Unauthorized(message),
        StatusCode::NOT_FOUND => Error::NotFound(message),
        // The API answers ownership violations with 400 "Not enough permissions"
        StatusCode::BAD_REQUEST if message.contains("permission") => Error::Unauthorized(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Error::Validation(message),
        _ => Error::Server {
            status: status.as_u16(),
            message,
        },
    }
}

/// Pull a readable message out of `{"detail": "..."}` or
/// `{"detail": [{"msg": "..."}, ...]}`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() -> Result<()> {
        let api = HttpApi::new(HttpApiOptions::new("http://localhost:8000/api/v1/"))?;
        assert_eq!(api.base_url(), "http://localhost:8000/api/v1");
        assert_eq!(
            api.endpoint("/tweets/"),
            "http://localhost:8000/api/v1/tweets/"
        );
        assert_eq!(
            api.endpoint("users/me"),
            "http://localhost:8000/api/v1/users/me"
        );
        Ok(())
    }

    #[test]
    fn test_current_user_without_token_is_anonymous() -> Result<()> {
        // No request is made when there is no token
        let api = HttpApi::new(HttpApiOptions::new("http://127.0.0.1:9").with_token(None))?;
        assert!(api.current_user()?.is_none());
        Ok(())
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let options = HttpApiOptions::new("http://x").with_token(Some(String::new()));
        assert!(options.token.is_none());
    }

    #[test]
    fn test_extract_detail_variants() {
        assert_eq!(
            extract_detail(r#"{"detail":"Tweet not found"}"#).as_deref(),
            Some("Tweet not found")
        );
        assert_eq!(
            extract_detail(
                r#"{"detail":[{"msg":"String should have at most 280 characters"},{"msg":"x"}]}"#
            )
            .as_deref(),
            Some("String should have at most 280 characters; x")
        );
        assert!(extract_detail("<html>").is_none());
    }

    #[test]
    fn test_error_from_status_mapping() {
        assert!(matches!(
            error_from_status(StatusCode::NOT_FOUND, r#"{"detail":"Tweet not found"}"#),
            Error::NotFound(msg) if msg == "Tweet not found"
        ));
        assert!(matches!(
            error_from_status(StatusCode::BAD_REQUEST, r#"{"detail":"Not enough permissions"}"#),
            Error::Unauthorized(_)
        ));
        assert!(matches!(
            error_from_status(StatusCode::UNPROCESSABLE_ENTITY, "{}"),
            Error::Validation(_)
        ));
        assert!(matches!(
            error_from_status(StatusCode::UNAUTHORIZED, ""),
            Error::Unauthorized(_)
        ));

        let server = error_from_status(StatusCode::BAD_GATEWAY, "");
        assert!(server.is_retryable());
        assert_eq!(server.to_string(), "HTTP 502: Bad Gateway");
    }
}
