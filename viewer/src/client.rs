//! HTTP client for the repoviz API

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::error::{ErrorCategory, SearchError};
use crate::models::{ApiErrorBody, UserData};

/// HTTP client for communicating with the repoviz API
#[derive(Clone)]
pub struct RepovizClient {
    client: reqwest::Client,
    base_url: String,
}

impl RepovizClient {
    /// Create a new client for the API at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Load profile, repositories and stats for `username`.
    ///
    /// Every failure, including transport errors, comes back classified.
    pub async fn fetch_user_data(&self, username: &str) -> Result<UserData, SearchError> {
        let response = self
            .client
            .get(format!("{}/api/github", self.base_url))
            .query(&[("username", username)])
            .send()
            .await
            .map_err(|e| {
                SearchError::new(ErrorCategory::GenericFetchFailure, "Failed to fetch user data")
                    .with_details(Some(e.to_string()))
            })?;

        let status = response.status();
        if status.is_success() {
            return response.json::<UserData>().await.map_err(|e| {
                SearchError::new(
                    ErrorCategory::GenericFetchFailure,
                    "Unexpected response from the API",
                )
                .with_details(Some(e.to_string()))
            });
        }

        let category = ErrorCategory::from_status(status.as_u16());
        let body = response.text().await.unwrap_or_default();
        if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(&body) {
            return Err(SearchError::new(category, parsed.error).with_details(parsed.details));
        }

        // Errors from the API's own handlers are JSON; a plain 429 comes
        // from its per-client request limiter
        let message = match category {
            ErrorCategory::RateLimited => "The repoviz API is limiting requests from this machine",
            _ => category.title(),
        };
        Err(SearchError::new(category, message)
            .with_details(Some(body).filter(|b| !b.trim().is_empty())))
    }
}
