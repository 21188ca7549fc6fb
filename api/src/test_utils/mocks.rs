//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They record every call so tests can verify what reached "GitHub".

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Profile, Repository};
use crate::domain::ports::GitHubClient;
use crate::error::GitHubError;

/// Upstream failure to replay: (status, message)
type Failure = (u16, String);

// ============================================================================
// Mock GitHub Client
// ============================================================================

#[derive(Default)]
pub struct MockGitHubClient {
    users: Arc<RwLock<HashMap<String, Profile>>>,
    repos: Arc<RwLock<HashMap<String, Vec<Repository>>>>,
    user_failure: Arc<RwLock<Option<Failure>>>,
    repos_failure: Arc<RwLock<Option<Failure>>>,
    /// Every call made, as (operation, username)
    pub calls: Arc<RwLock<Vec<(&'static str, String)>>>,
    pub last_per_page: Arc<RwLock<Option<u8>>>,
}

impl MockGitHubClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure a user to exist
    pub fn with_user(self, profile: Profile) -> Self {
        self.users
            .write()
            .unwrap()
            .insert(profile.login.clone(), profile);
        self
    }

    /// Configure the repositories returned for a user
    pub fn with_repos(self, username: &str, repos: Vec<Repository>) -> Self {
        self.repos
            .write()
            .unwrap()
            .insert(username.to_string(), repos);
        self
    }

    /// Make every profile request fail with the given upstream status
    pub fn with_user_failure(self, status: u16, message: &str) -> Self {
        *self.user_failure.write().unwrap() = Some((status, message.to_string()));
        self
    }

    /// Make every repository request fail with the given upstream status
    pub fn with_repos_failure(self, status: u16, message: &str) -> Self {
        *self.repos_failure.write().unwrap() = Some((status, message.to_string()));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    fn record(&self, operation: &'static str, username: &str) {
        self.calls
            .write()
            .unwrap()
            .push((operation, username.to_string()));
    }
}

#[async_trait]
impl GitHubClient for MockGitHubClient {
    async fn get_user(&self, username: &str) -> Result<Profile, GitHubError> {
        self.record("get_user", username);

        if let Some((status, message)) = self.user_failure.read().unwrap().clone() {
            return Err(GitHubError::from_status(status, username, message));
        }

        self.users
            .read()
            .unwrap()
            .get(username)
            .cloned()
            .ok_or_else(|| GitHubError::UserNotFound(username.to_string()))
    }

    async fn list_repos(
        &self,
        username: &str,
        per_page: u8,
    ) -> Result<Vec<Repository>, GitHubError> {
        self.record("list_repos", username);
        *self.last_per_page.write().unwrap() = Some(per_page);

        if let Some((status, message)) = self.repos_failure.read().unwrap().clone() {
            return Err(GitHubError::from_status(status, username, message));
        }

        if !self.users.read().unwrap().contains_key(username) {
            return Err(GitHubError::UserNotFound(username.to_string()));
        }

        Ok(self
            .repos
            .read()
            .unwrap()
            .get(username)
            .cloned()
            .unwrap_or_default())
    }
}
