//! Domain entities
//!
//! Snapshots of GitHub data and the statistics derived from them.

pub mod profile;
pub mod repository;
pub mod stats;

pub use profile::Profile;
pub use repository::Repository;
pub use stats::{LanguageCounts, Stats};
