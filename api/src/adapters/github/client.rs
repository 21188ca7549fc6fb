//! GitHub API client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::entities::{Profile, Repository};
use crate::domain::ports::GitHubClient;
use crate::error::GitHubError;

const ACCEPT_GITHUB_V3: &str = "application/vnd.github.v3+json";

/// Implementation of the GitHub API client
pub struct GitHubClientImpl {
    http: Client,
    base_url: String,
}

/// Error body returned by GitHub on non-2xx responses
#[derive(Deserialize)]
struct GitHubErrorBody {
    message: String,
}

impl GitHubClientImpl {
    /// Build a client whose every request carries the identifying headers
    /// and, when `token` is set, a bearer credential.
    pub fn new(
        base_url: String,
        token: Option<String>,
        user_agent: &str,
    ) -> Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|e| GitHubError::Config(format!("invalid user agent: {}", e)))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_GITHUB_V3));

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| GitHubError::Config(format!("invalid token value: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| GitHubError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
        username: &str,
    ) -> Result<T, GitHubError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| GitHubError::Deserialization(e.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<GitHubErrorBody>(&body) {
            Ok(parsed) => parsed.message,
            Err(_) if !body.trim().is_empty() => body,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };

        tracing::debug!(status = status.as_u16(), %message, "GitHub returned an error");
        Err(GitHubError::from_status(status.as_u16(), username, message))
    }
}

#[async_trait]
impl GitHubClient for GitHubClientImpl {
    async fn get_user(&self, username: &str) -> Result<Profile, GitHubError> {
        let resp = self
            .http
            .get(self.api_url(&format!("/users/{}", encode(username))))
            .send()
            .await?;

        self.handle_response(resp, username).await
    }

    async fn list_repos(
        &self,
        username: &str,
        per_page: u8,
    ) -> Result<Vec<Repository>, GitHubError> {
        let resp = self
            .http
            .get(self.api_url(&format!("/users/{}/repos", encode(username))))
            .query(&[("per_page", per_page.to_string()), ("sort", "updated".to_string())])
            .send()
            .await?;

        self.handle_response(resp, username).await
    }
}
