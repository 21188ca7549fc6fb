//! Search state
//!
//! Tracks the current query, the loading flag, and the last outcome.
//! Each submitted search gets a sequence number; only the outcome of the
//! most recently submitted search is ever applied.

use crate::error::SearchError;
use crate::models::UserData;

/// Handle for one submitted search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub username: String,
}

#[derive(Debug, Default)]
pub struct SearchState {
    query: String,
    loading: bool,
    error: Option<SearchError>,
    result: Option<UserData>,
    latest_seq: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search for `input`.
    ///
    /// Blank input is rejected without touching any state, so the caller
    /// never sends a request for it.
    pub fn submit(&mut self, input: &str) -> Result<SearchTicket, SearchError> {
        let username = input.trim();
        if username.is_empty() {
            return Err(SearchError::empty_input());
        }

        self.latest_seq += 1;
        self.query = username.to_string();
        self.loading = true;
        self.error = None;

        Ok(SearchTicket {
            seq: self.latest_seq,
            username: self.query.clone(),
        })
    }

    /// Apply the outcome of search `seq`.
    ///
    /// Returns `false` (and changes nothing) when a newer search has been
    /// submitted since. Success replaces the whole result; failure clears it.
    pub fn resolve(&mut self, seq: u64, outcome: Result<UserData, SearchError>) -> bool {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "Discarding stale search response");
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(data) => {
                self.result = Some(data);
                self.error = None;
            }
            Err(err) => {
                self.result = None;
                self.error = Some(err);
            }
        }
        true
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&SearchError> {
        self.error.as_ref()
    }

    pub fn result(&self) -> Option<&UserData> {
        self.result.as_ref()
    }
}
