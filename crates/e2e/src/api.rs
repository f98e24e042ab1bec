//! API client used for test setup
//!
//! Registers users, obtains auth tokens, and creates articles directly
//! against the backend so browser tests can start from a known state instead
//! of clicking through every precondition.
//!
//! Server errors (>= 500) are retried with linear backoff: 1s, 2s, 3s, ...
//! before each subsequent attempt. Client errors (4xx) and transport errors
//! are never retried.

use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{E2eError, E2eResult};
use crate::types::{Article, User};

const DEFAULT_RETRIES: usize = 5;

/// Client for the backend REST API
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    retries: usize,
}

/// Server envelope for user payloads
#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: UserWire,
}

#[derive(Debug, Deserialize)]
struct UserWire {
    username: String,
    email: String,
    #[serde(default)]
    token: Option<String>,
}

/// Server envelope for article payloads
#[derive(Debug, Deserialize)]
struct ArticleEnvelope {
    article: ArticleWire,
}

#[derive(Debug, Deserialize)]
struct ArticleWire {
    title: String,
    description: String,
    body: String,
    #[serde(default, rename = "tagList")]
    tag_list: Vec<String>,
    slug: Option<String>,
}

impl ApiClient {
    /// Create a client against the given API base URL.
    ///
    /// `base_url` is expected to carry a trailing slash; request paths are
    /// appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            retries: DEFAULT_RETRIES,
        }
    }

    /// Override the attempt budget (default 5).
    pub fn with_retries(mut self, retries: usize) -> Self {
        self.retries = retries;
        self
    }

    /// Register a user. Returns the server's representation of the account.
    pub async fn register_user(&self, user: &User) -> E2eResult<User> {
        let response = self
            .request(Method::POST, "users", Some(json!({ "user": user })), None)
            .await?;
        let envelope: UserEnvelope = serde_json::from_value(response)?;
        Ok(User {
            username: envelope.user.username,
            email: envelope.user.email,
            // The server never echoes the password back
            password: user.password.clone(),
        })
    }

    /// Log in and return the bearer token for the account.
    pub async fn get_auth_token(&self, email: &str, password: &str) -> E2eResult<String> {
        let body = json!({ "user": { "email": email, "password": password } });
        let response = self
            .request(Method::POST, "users/login", Some(body), None)
            .await?;
        let envelope: UserEnvelope = serde_json::from_value(response)?;
        envelope
            .user
            .token
            .ok_or_else(|| E2eError::MissingResult("user.token".to_string()))
    }

    /// Create an article as the user owning `token`. The returned article
    /// carries the server-assigned slug.
    pub async fn create_article(&self, article: &Article, token: &str) -> E2eResult<Article> {
        let body = json!({
            "article": {
                "title": article.title,
                "description": article.description,
                "body": article.body,
                "tagList": article.tags,
            }
        });
        let response = self
            .request(Method::POST, "articles", Some(body), Some(token))
            .await?;
        let envelope: ArticleEnvelope = serde_json::from_value(response)?;
        Ok(Article {
            title: envelope.article.title,
            description: envelope.article.description,
            body: envelope.article.body,
            tags: envelope.article.tag_list,
            slug: envelope.article.slug,
        })
    }

    /// Issue one logical request, masking transient server failures.
    ///
    /// A 2xx response is terminal: its body is parsed as JSON (an empty body
    /// yields an empty object). A >= 500 response is retried with linear
    /// backoff while attempts remain. A 4xx response, or a >= 500 response on
    /// the final attempt, fails with the status code and raw body text.
    /// Transport failures propagate as-is from reqwest.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> E2eResult<Value> {
        let url = format!("{}{}", self.base_url, path);

        for attempt in 1..=self.retries {
            let mut request = self
                .client
                .request(method.clone(), &url)
                .header(reqwest::header::CONTENT_TYPE, "application/json");

            if let Some(token) = token {
                request = request.header(reqwest::header::AUTHORIZATION, format!("Token {token}"));
            }

            if let Some(body) = &body {
                request = request.json(body);
            }

            let response = request.send().await?;
            let status = response.status();

            if status.is_success() {
                let text = response.text().await?;
                if text.is_empty() {
                    return Ok(json!({}));
                }
                return Ok(serde_json::from_str(&text)?);
            }

            if status.is_server_error() && attempt < self.retries {
                let backoff = Duration::from_millis(1000 * attempt as u64);
                warn!(
                    "{} {} returned {}, retrying in {:?} (attempt {}/{})",
                    method, url, status, backoff, attempt, self.retries
                );
                tokio::time::sleep(backoff).await;
                continue;
            }

            let text = response.text().await.unwrap_or_default();
            debug!("{} {} failed permanently with {}", method, url, status);
            return Err(E2eError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        // Every loop iteration either returns or continues with attempts
        // remaining, so this is unreachable in correct operation.
        Err(E2eError::RetryLoopExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(format!("{}/api/", server.uri()))
    }

    #[tokio::test]
    async fn test_empty_success_body_yields_empty_object() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/ping"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let value = client_for(&server)
            .request(Method::POST, "ping", None, None)
            .await
            .unwrap();
        assert_eq!(value, json!({}));
    }

    #[tokio::test]
    async fn test_server_error_retries_with_linear_backoff() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/flaky"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/flaky"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let start = Instant::now();
        let value = client_for(&server)
            .request(Method::POST, "flaky", None, None)
            .await
            .unwrap();

        assert_eq!(value, json!({"ok": true}));
        // First retry waits 1000ms * attempt 1
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn test_client_error_is_never_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .request(Method::POST, "missing", None, None)
            .await
            .unwrap_err();

        match err {
            E2eError::Api { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "not found");
            }
            other => panic!("expected Api error, got {other}"),
        }
        assert!(request_count_is(&server, "/api/missing", 1).await);
    }

    #[tokio::test]
    async fn test_exhausted_retries_surface_final_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/broken"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server).with_retries(2);
        let err = client
            .request(Method::POST, "broken", None, None)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("boom"));
    }

    async fn request_count_is(server: &MockServer, wanted_path: &str, count: usize) -> bool {
        let requests = server.received_requests().await.unwrap_or_default();
        requests
            .iter()
            .filter(|r| r.url.path() == wanted_path)
            .count()
            == count
    }
}
