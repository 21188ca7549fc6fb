//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod github;

pub use github::get_user_data;
