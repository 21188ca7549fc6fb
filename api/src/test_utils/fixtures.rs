//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{TimeZone, Utc};

use crate::domain::entities::{Profile, Repository};

/// Create a test profile for `login`
pub fn test_profile(login: &str) -> Profile {
    Profile {
        login: login.to_string(),
        id: 42,
        name: Some(format!("{} (test)", login)),
        avatar_url: format!("https://avatars.example.com/{}.png", login),
        html_url: format!("https://github.com/{}", login),
        bio: Some("Writes software".to_string()),
        location: Some("Earth".to_string()),
        blog: None,
        created_at: Utc.with_ymd_and_hms(2015, 6, 1, 12, 0, 0).unwrap(),
        public_repos: 12,
        followers: 34,
        following: 5,
    }
}

/// Create a test repository with a language and star count
pub fn test_repo(name: &str, language: Option<&str>, stars: u64) -> Repository {
    Repository {
        id: name.bytes().map(u64::from).sum(),
        name: name.to_string(),
        full_name: format!("octocat/{}", name),
        html_url: format!("https://github.com/octocat/{}", name),
        description: Some(format!("The {} project", name)),
        language: language.map(str::to_string),
        stargazers_count: Some(stars),
        forks_count: 1,
        updated_at: None,
    }
}

/// Create a test repository GitHub reported without a star count
pub fn test_repo_without_stars(name: &str) -> Repository {
    Repository {
        stargazers_count: None,
        language: None,
        ..test_repo(name, None, 0)
    }
}
