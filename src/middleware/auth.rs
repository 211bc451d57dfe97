use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};

/// Raw bearer token lifted off the Authorization header. Carries no claim of
/// validity; handlers that need an identity verify it themselves.
#[derive(Clone, Debug)]
pub struct BearerToken(pub String);

/// Attaches [`BearerToken`] to the request extensions when the header is
/// present and well-formed, and nothing otherwise. Read-only endpoints never
/// look at it, so an absent or malformed header is not an error here.
pub async fn extract_token(mut request: Request<Body>, next: Next) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .map(str::to_owned);

    if let Some(token) = token {
        request.extensions_mut().insert(BearerToken(token));
    }

    next.run(request).await
}

// Prefix match is case-sensitive.
fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("bearer ")
}
