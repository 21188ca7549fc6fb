use std::env;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "GitHub-Visualizer-App";

#[derive(Clone)]
pub struct Config {
    /// Base URL of the GitHub REST API
    pub github_api_url: String,
    /// Optional token; raises the upstream rate limit from 60 to 5000 requests/hour
    pub github_token: Option<String>,
    /// Value sent as the User-Agent header on every upstream call
    pub user_agent: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            github_api_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.to_string()),
            github_token: env::var("GITHUB_TOKEN").ok().filter(|t| !t.trim().is_empty()),
            user_agent: env::var("GITHUB_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Check if a GitHub token is configured
    pub fn has_token(&self) -> bool {
        self.github_token.is_some()
    }
}
