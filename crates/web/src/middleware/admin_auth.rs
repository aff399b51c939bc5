use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::common::RouteErrorResponse;

/// The shared secret administrators present as a bearer token. Identity
/// management itself lives with an external provider; this gate only checks
/// that the caller holds the configured token.
#[derive(Debug, Clone)]
pub struct AdminToken(String);

impl AdminToken {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self(token.into())
    }

    fn authorizes(&self, header_value: &str) -> bool {
        header_value
            .strip_prefix("Bearer ")
            .map(|token| token == self.0)
            .unwrap_or(false)
    }
}

pub async fn admin_auth_middleware(
    State(token): State<AdminToken>,
    req: Request,
    next: Next,
) -> Response {
    let authorized = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| token.authorizes(value))
        .unwrap_or(false);

    if authorized {
        next.run(req).await
    } else {
        RouteErrorResponse::new(StatusCode::UNAUTHORIZED)
            .with_message("Administrator authentication required.")
            .into_response()
    }
}
