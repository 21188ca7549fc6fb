//! Application layer
//!
//! Contains use cases and service orchestration.

pub mod user_data_service;

pub use user_data_service::{UserData, UserDataService};
