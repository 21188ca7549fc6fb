//! Repository domain entity
//!
//! Snapshot of one entry of `GET /users/{username}/repos`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Primary language label assigned by GitHub, if any
    #[serde(default)]
    pub language: Option<String>,
    /// Missing and null are both tolerated and count as zero stars
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Repository {
    pub fn stars(&self) -> u64 {
        self.stargazers_count.unwrap_or(0)
    }
}
