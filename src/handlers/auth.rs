use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use tower_sessions::Session;

use crate::errors::AppResult;
use crate::middleware::SESSION_USER_KEY;
use crate::models::{Credentials, UserDto};
use crate::services::AppState;

pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<Credentials>,
) -> AppResult<Json<UserDto>> {
    let username = credentials.username.as_deref().unwrap_or_default();
    let password = credentials.password.as_deref().unwrap_or_default();
    tracing::info!("Login attempt for user: {}", username);

    let user = state.users.authenticate(username, password).await?;

    session.insert(SESSION_USER_KEY, user.id).await?;
    tracing::info!("Session established for user: {}", user.username);

    Ok(Json(UserDto::from(user)))
}

pub async fn handle_logout(session: Session) -> AppResult<StatusCode> {
    session.remove::<i64>(SESSION_USER_KEY).await?;
    Ok(StatusCode::OK)
}
