use std::env;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Clone)]
pub struct Config {
    /// Base URL of the repoviz API
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_url: env::var("REPOVIZ_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }
}
