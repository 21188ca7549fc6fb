//! Search error types
//!
//! Every failed search ends up as a `SearchError` carrying one of the
//! categories below, each with its own remediation text.

use thiserror::Error;

/// What went wrong with a search, from the user's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    SubjectNotFound,
    RateLimited,
    InvalidCredential,
    MalformedInput,
    GenericFetchFailure,
    /// Blank input; no request was sent
    EmptyInput,
}

impl ErrorCategory {
    /// Classify an API status code
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => ErrorCategory::SubjectNotFound,
            429 => ErrorCategory::RateLimited,
            401 => ErrorCategory::InvalidCredential,
            400 => ErrorCategory::MalformedInput,
            _ => ErrorCategory::GenericFetchFailure,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ErrorCategory::SubjectNotFound => "User not found",
            ErrorCategory::RateLimited => "Rate limit exceeded",
            ErrorCategory::InvalidCredential => "Invalid GitHub token",
            ErrorCategory::MalformedInput => "Invalid username",
            ErrorCategory::GenericFetchFailure => "Failed to fetch user data",
            ErrorCategory::EmptyInput => "Enter a username",
        }
    }

    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCategory::SubjectNotFound => {
                "Check the spelling of the username and try again."
            }
            ErrorCategory::RateLimited => {
                "Either GitHub or the repoviz API is limiting requests.\n\
                 If the message mentions GitHub (60 unauthenticated requests per hour):\n\
                 1. Wait up to an hour for the rate limit to reset\n\
                 2. Set GITHUB_TOKEN for the API server (5000 requests/hour):\n\
                 \x20  create a token at https://github.com/settings/tokens with the\n\
                 \x20  'public_repo' scope, add GITHUB_TOKEN=<token> to .env and restart\n\
                 If the repoviz API is throttling this machine, wait a few seconds\n\
                 and search again; a token does not raise that limit."
            }
            ErrorCategory::InvalidCredential => {
                "The API server's GITHUB_TOKEN was rejected. Generate a new token at\n\
                 https://github.com/settings/tokens, update .env and restart the server."
            }
            ErrorCategory::MalformedInput => {
                "GitHub usernames may only contain alphanumeric characters or single hyphens."
            }
            ErrorCategory::GenericFetchFailure => {
                "Make sure the repoviz API is running and reachable, then try again."
            }
            ErrorCategory::EmptyInput => "Type a GitHub username and press enter.",
        }
    }
}

/// A failed search
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct SearchError {
    pub category: ErrorCategory,
    pub message: String,
    pub details: Option<String>,
}

impl SearchError {
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Option<String>) -> Self {
        self.details = details;
        self
    }

    pub fn empty_input() -> Self {
        Self::new(ErrorCategory::EmptyInput, ErrorCategory::EmptyInput.title())
    }
}
