//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: GitHub snapshots and derived statistics
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
