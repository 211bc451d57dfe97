use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::ApiError;
use crate::services::{password, AppState};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: Option<String>,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state.users.find_by_username(&payload.username).await;

    // Unknown username and wrong password share one response.
    let user = match user {
        Some(user) if password::verify_password(&payload.password, &user.password_hash) => user,
        _ => {
            return Err(ApiError::Auth(
                "invalid username or password".to_string(),
            ))
        }
    };

    let token = state
        .tokens
        .issue(user.id, &user.username)
        .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?;

    Ok(Json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    }))
}
