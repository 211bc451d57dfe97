use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::middleware::auth::extract_token;
use crate::services::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Blogs
        .route("/api/blogs", get(handlers::blogs::list_blogs))
        .route("/api/blogs", post(handlers::blogs::create_blog))
        .route("/api/blogs/:id", put(handlers::blogs::update_blog))
        .route("/api/blogs/:id", delete(handlers::blogs::delete_blog))
        // Users
        .route("/api/users", get(handlers::users::list_users))
        .route("/api/users", post(handlers::users::register))
        // Login
        .route("/api/login", post(handlers::login::login))
        .layer(axum::middleware::from_fn(extract_token))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
