//! GitHub client port trait
//!
//! Defines the interface for reading profile and repository data from GitHub.

use async_trait::async_trait;

use crate::domain::entities::{Profile, Repository};
use crate::error::GitHubError;

/// Largest page GitHub allows; only the first page is ever fetched
pub const REPOS_PER_PAGE: u8 = 100;

/// Port trait for GitHub API read operations
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch the public profile of `username`
    async fn get_user(&self, username: &str) -> Result<Profile, GitHubError>;

    /// Fetch up to `per_page` repositories of `username`, most recently updated first
    async fn list_repos(&self, username: &str, per_page: u8)
        -> Result<Vec<Repository>, GitHubError>;
}
