//! Profile domain entity
//!
//! Snapshot of a GitHub account as returned by `GET /users/{username}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    pub id: u64,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Website as entered by the user (GitHub sends an empty string when unset)
    #[serde(default)]
    pub blog: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
}
