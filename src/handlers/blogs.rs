use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use super::ApiError;
use crate::middleware::auth::BearerToken;
use crate::models::blog::{Blog, BlogListEntry, BlogPatch, BlogResponse, OwnerSummary};
use crate::services::token::TokenError;
use crate::services::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}

pub async fn list_blogs(State(state): State<Arc<AppState>>) -> Json<Vec<BlogListEntry>> {
    let blogs = state.blogs.find_all().await;

    let mut entries = Vec::with_capacity(blogs.len());
    for blog in blogs {
        let owner = match blog.user {
            Some(id) => state.users.find_by_id(id).await.map(|user| OwnerSummary {
                username: user.username,
                name: user.name,
            }),
            None => None,
        };
        entries.push(BlogListEntry::new(&blog, owner));
    }

    Json(entries)
}

/// Ordered short-circuits: token, title, url, then the two writes. The blog
/// insert and the owner update are sequential; a crash between them leaves a
/// blog without a user-side back-reference.
pub async fn create_blog(
    State(state): State<Arc<AppState>>,
    token: Option<Extension<BearerToken>>,
    Json(payload): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<BlogResponse>), ApiError> {
    let Extension(BearerToken(token)) = token.ok_or(TokenError::Missing)?;
    let claims = state.tokens.verify(&token)?;

    let title = payload
        .title
        .ok_or_else(|| ApiError::Validation("title missing".to_string()))?;
    let url = payload
        .url
        .ok_or_else(|| ApiError::Validation("url missing".to_string()))?;

    let mut user = state.users.find_by_id(claims.id).await.ok_or_else(|| {
        ApiError::Internal(anyhow::anyhow!(
            "token resolved to unknown user {}",
            claims.id
        ))
    })?;

    let blog = Blog::new(title, payload.author, url, payload.likes, Some(user.id));
    let blog = state.blogs.insert(blog).await;

    user.blogs.push(blog.id);
    state
        .users
        .update(user)
        .await
        .map_err(|e| ApiError::Internal(e.into()))?;

    Ok((StatusCode::CREATED, Json(BlogResponse::from(&blog))))
}

pub async fn update_blog(
    State(state): State<Arc<AppState>>,
    token: Option<Extension<BearerToken>>,
    Path(id): Path<String>,
    Json(patch): Json<BlogPatch>,
) -> Result<Json<BlogResponse>, ApiError> {
    let id = parse_id(&id)?;
    let mut blog = state
        .blogs
        .find_by_id(id)
        .await
        .ok_or(ApiError::MalformattedId)?;

    if state.config.enforce_ownership {
        authorize_owner(&state, token, &blog)?;
    }

    patch.apply(&mut blog);
    let blog = state
        .blogs
        .update(blog)
        .await
        .map_err(|_| ApiError::MalformattedId)?;

    Ok(Json(BlogResponse::from(&blog)))
}

pub async fn delete_blog(
    State(state): State<Arc<AppState>>,
    token: Option<Extension<BearerToken>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let blog = state
        .blogs
        .find_by_id(id)
        .await
        .ok_or(ApiError::MalformattedId)?;

    if state.config.enforce_ownership {
        authorize_owner(&state, token, &blog)?;
    }

    state
        .blogs
        .delete(id)
        .await
        .map_err(|_| ApiError::MalformattedId)?;

    // Historical behavior keeps the stale id in the owner's list; the strict
    // mode prunes it.
    if state.config.enforce_ownership {
        if let Some(owner_id) = blog.user {
            if let Some(mut owner) = state.users.find_by_id(owner_id).await {
                owner.blogs.retain(|blog_id| *blog_id != id);
                state
                    .users
                    .update(owner)
                    .await
                    .map_err(|e| ApiError::Internal(e.into()))?;
            }
        }
    }

    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::MalformattedId)
}

fn authorize_owner(
    state: &AppState,
    token: Option<Extension<BearerToken>>,
    blog: &Blog,
) -> Result<(), ApiError> {
    let Extension(BearerToken(token)) = token.ok_or(TokenError::Missing)?;
    let claims = state.tokens.verify(&token)?;

    if blog.user == Some(claims.id) {
        Ok(())
    } else {
        Err(ApiError::Auth("blog does not belong to caller".to_string()))
    }
}
