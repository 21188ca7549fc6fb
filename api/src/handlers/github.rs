//! GitHub data handlers
//!
//! Endpoint the front end calls to load everything for one username.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::app::UserData;
use crate::domain::ports::GitHubClient;
use crate::error::AppError;
use crate::AppState;

/// Query params for `GET /api/github`
#[derive(Debug, Deserialize)]
pub struct UserDataParams {
    pub username: Option<String>,
}

/// GET /api/github?username=<login>
///
/// Profile, up to 100 most recently updated repositories, and their stats.
pub async fn get_user_data<GC>(
    State(state): State<AppState<GC>>,
    Query(params): Query<UserDataParams>,
) -> Result<Json<UserData>, AppError>
where
    GC: GitHubClient + 'static,
{
    let username = params
        .username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing username".to_string()))?;

    tracing::info!(username, "Fetching GitHub user data");

    let data = state.user_data_service.fetch(username).await?;
    Ok(Json(data))
}
