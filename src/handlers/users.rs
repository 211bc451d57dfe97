use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;

use super::ApiError;
use crate::models::user::{User, UserResponse};
use crate::services::{password, AppState};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub name: Option<String>,
    pub password: Option<String>,
    pub adult: Option<bool>,
}

/// Responds 200 on success, not 201. The status is part of the existing
/// contract.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let password = payload
        .password
        .ok_or_else(|| ApiError::Validation("password is missing".to_string()))?;
    if password.chars().count() < 3 {
        return Err(ApiError::Validation("password too short".to_string()));
    }

    let password_hash = password::hash_password(&password)?;
    let user = User::new(payload.username, payload.name, password_hash, payload.adult);

    let user = state
        .users
        .insert(user)
        .await
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    Ok(Json(UserResponse::from(&user)))
}

pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<UserResponse>> {
    let users = state.users.find_all().await;
    Json(users.iter().map(UserResponse::from).collect())
}
