use axum::{
    body::Body,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::errors::AppError;

// Session key holding the authenticated user's id.
pub const SESSION_USER_KEY: &str = "user_id";

pub async fn require_auth(session: Session, req: Request<Body>, next: Next) -> Response {
    let path = req.uri().path();

    if path == "/api/auth/login" || path == "/api/users/register" {
        return next.run(req).await;
    }

    match session.get::<i64>(SESSION_USER_KEY).await {
        Ok(Some(_)) => next.run(req).await,
        _ => AppError::AuthenticationFailed.into_response(),
    }
}
