//! Test fixtures
//!
//! Factory functions for building API payloads in tests.

use chrono::{TimeZone, Utc};

use crate::models::{LanguageCounts, Profile, Repository, Stats, UserData};

/// Create a test profile for `login`
pub fn test_profile(login: &str) -> Profile {
    Profile {
        login: login.to_string(),
        name: Some(format!("{} (test)", login)),
        avatar_url: format!("https://avatars.example.com/{}.png", login),
        html_url: format!("https://github.com/{}", login),
        bio: Some("Writes software".to_string()),
        location: Some("Earth".to_string()),
        blog: Some("https://example.com".to_string()),
        created_at: Utc.with_ymd_and_hms(2015, 6, 1, 12, 0, 0).unwrap(),
        public_repos: 12,
        followers: 34,
        following: 5,
    }
}

/// Create a test repository
pub fn test_repo(name: &str, language: Option<&str>, stars: u64) -> Repository {
    Repository {
        name: name.to_string(),
        html_url: format!("https://github.com/octocat/{}", name),
        description: Some(format!("The {} project", name)),
        language: language.map(str::to_string),
        stargazers_count: Some(stars),
        forks_count: 2,
    }
}

/// Build a full search result from `(name, language, stars)` triples,
/// with stats computed the way the API computes them
pub fn user_data(login: &str, repos: &[(&str, Option<&str>, u64)]) -> UserData {
    let repos: Vec<Repository> = repos
        .iter()
        .map(|(name, language, stars)| test_repo(name, *language, *stars))
        .collect();

    let mut counts: Vec<(String, u64)> = Vec::new();
    for language in repos.iter().filter_map(|r| r.language.as_deref()) {
        match counts.iter_mut().find(|(name, _)| name == language) {
            Some((_, count)) => *count += 1,
            None => counts.push((language.to_string(), 1)),
        }
    }

    UserData {
        profile: test_profile(login),
        stats: Stats {
            total_stars: repos.iter().map(Repository::stars).sum(),
            languages: counts.into_iter().collect::<LanguageCounts>(),
        },
        repos,
    }
}
