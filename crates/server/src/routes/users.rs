use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterInput {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<serde_json::Value>, ApiError> {
    info!(username = %input.username, "user login attempt");
    let token = state.accounts.login(&input.username, &input.password).await?;
    Ok(Json(serde_json::json!({ "token": token })))
}

pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> Result<Json<serde_json::Value>, ApiError> {
    info!(username = %input.username, "user registration attempt");
    let message = state
        .accounts
        .register(&input.username, &input.email, &input.password, input.role.as_deref())
        .await?;
    Ok(Json(serde_json::json!({ "message": message })))
}
