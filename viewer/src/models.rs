//! Response models of the repoviz API
//!
//! Mirrors the JSON served by `GET /api/github`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A GitHub user profile
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    pub created_at: DateTime<Utc>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
}

impl Profile {
    /// Display name, falling back to the login
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.login)
    }
}

/// A GitHub repository
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub forks_count: u64,
}

impl Repository {
    pub fn stars(&self) -> u64 {
        self.stargazers_count.unwrap_or(0)
    }
}

/// Repository count per language, in the order the API listed them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageCounts(Vec<(String, u64)>);

impl LanguageCounts {
    /// Languages sorted by count descending; ties keep their original order
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .0
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl FromIterator<(String, u64)> for LanguageCounts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

struct LanguageCountsVisitor;

impl<'de> Visitor<'de> for LanguageCountsVisitor {
    type Value = LanguageCounts;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of language name to repository count")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, count)) = access.next_entry::<String, u64>()? {
            entries.push((name, count));
        }
        Ok(LanguageCounts(entries))
    }
}

impl<'de> Deserialize<'de> for LanguageCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LanguageCountsVisitor)
    }
}

/// Aggregate statistics over a user's repositories
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_stars: u64,
    pub languages: LanguageCounts,
}

/// One successful search: replaced as a whole, never merged
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserData {
    pub profile: Profile,
    pub repos: Vec<Repository>,
    pub stats: Stats,
}

/// Error body returned by the API on non-2xx responses
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(default)]
    pub details: Option<String>,
}
