//! Stats domain entity
//!
//! Values derived from a repository list. `Stats::from_repos` is the only
//! constructor used by the service, so stats always match the list they
//! were computed from.

use serde::{Serialize, Serializer};

use super::Repository;

/// Number of repositories per primary language, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageCounts {
    entries: Vec<(String, u64)>,
}

impl LanguageCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more repository for `language` (exact, case-sensitive match)
    pub fn increment(&mut self, language: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == language) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((language.to_string(), 1)),
        }
    }

    #[cfg(test)]
    pub fn get(&self, language: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

impl Serialize for LanguageCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(name, count)| (name, count)))
    }
}

/// Aggregate statistics over a user's repositories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_stars: u64,
    pub languages: LanguageCounts,
}

impl Stats {
    pub fn from_repos(repos: &[Repository]) -> Self {
        let total_stars = repos.iter().map(Repository::stars).sum();

        let mut languages = LanguageCounts::new();
        for language in repos.iter().filter_map(|r| r.language.as_deref()) {
            languages.increment(language);
        }

        Self {
            total_stars,
            languages,
        }
    }
}
