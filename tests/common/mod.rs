// Not every helper is used by every test binary.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use blogvault::config::Config;
use blogvault::models::blog::Blog;
use blogvault::router::create_router;
use blogvault::services::AppState;

pub fn test_config(enforce_ownership: bool) -> Config {
    Config {
        port: 0,
        jwt_secret: "test_secret".to_string(),
        enforce_ownership,
    }
}

/// Fresh router plus a handle on its state so tests can seed and inspect the
/// stores directly.
pub fn test_app(enforce_ownership: bool) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(test_config(enforce_ownership)));
    (create_router(state.clone()), state)
}

pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Value,
) -> Response {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("bearer {token}"));
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn send_empty(app: &Router, method: &str, uri: &str, token: Option<&str>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("bearer {token}"));
    }
    let request = builder.body(Body::empty()).unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send_empty(app, "GET", uri, None).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Registers a user and logs in, returning the issued token.
pub async fn register_and_login(app: &Router, username: &str, password: &str) -> String {
    let response = send_json(
        app,
        "POST",
        "/api/users",
        None,
        json!({ "username": username, "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send_json(
        app,
        "POST",
        "/api/login",
        None,
        json!({ "username": username, "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    body_json(response).await["token"]
        .as_str()
        .expect("login response carries a token")
        .to_string()
}

/// Six well-known blogs, seeded straight into the store.
pub async fn seed_blogs(state: &AppState) {
    let fixture = [
        ("React patterns", "Michael Chan", "https://reactpatterns.com/", 7),
        (
            "Go To Statement Considered Harmful",
            "Edsger W. Dijkstra",
            "http://www.u.arizona.edu/~rubinson/copyright_violations/Go_To_Considered_Harmful.html",
            5,
        ),
        (
            "Canonical string reduction",
            "Edsger W. Dijkstra",
            "http://www.cs.utexas.edu/~EWD/transcriptions/EWD08xx/EWD808.html",
            12,
        ),
        (
            "First class tests",
            "Robert C. Martin",
            "http://blog.cleancoder.com/uncle-bob/2017/05/05/TestDefinitions.htmll",
            10,
        ),
        (
            "TDD harms architecture",
            "Robert C. Martin",
            "http://blog.cleancoder.com/uncle-bob/2017/03/03/TDD-Harms-Architecture.html",
            0,
        ),
        (
            "Type wars",
            "Robert C. Martin",
            "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html",
            2,
        ),
    ];

    for (title, author, url, likes) in fixture {
        state
            .blogs
            .insert(Blog::new(
                title.to_string(),
                Some(author.to_string()),
                url.to_string(),
                Some(likes),
                None,
            ))
            .await;
    }
}

pub async fn blog_count(state: &AppState) -> usize {
    state.blogs.find_all().await.len()
}

pub async fn user_count(state: &AppState) -> usize {
    state.users.find_all().await.len()
}
