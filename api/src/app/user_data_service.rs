//! User data service
//!
//! Fetches a user's profile and repositories concurrently and derives the
//! statistics the dashboard and map are drawn from.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{Profile, Repository, Stats};
use crate::domain::ports::{GitHubClient, REPOS_PER_PAGE};
use crate::error::AppError;

/// Everything the front end needs for one search
#[derive(Debug, Clone, Serialize)]
pub struct UserData {
    pub profile: Profile,
    pub repos: Vec<Repository>,
    pub stats: Stats,
}

/// Service for loading a user's GitHub data
pub struct UserDataService<GC>
where
    GC: GitHubClient,
{
    github: Arc<GC>,
}

impl<GC> UserDataService<GC>
where
    GC: GitHubClient,
{
    pub fn new(github: Arc<GC>) -> Self {
        Self { github }
    }

    /// Fetch profile and repositories for `username`.
    ///
    /// Both requests are issued at once and both must succeed; there is no
    /// partial result and no retry.
    pub async fn fetch(&self, username: &str) -> Result<UserData, AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::BadRequest("Missing username".to_string()));
        }

        let (profile, repos) = tokio::try_join!(
            self.github.get_user(username),
            self.github.list_repos(username, REPOS_PER_PAGE),
        )?;

        let stats = Stats::from_repos(&repos);
        tracing::debug!(
            username,
            repos = repos.len(),
            total_stars = stats.total_stars,
            languages = stats.languages.len(),
            "Fetched user data"
        );

        Ok(UserData {
            profile,
            repos,
            stats,
        })
    }
}
