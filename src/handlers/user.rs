use axum::extract::{Json, State};

use crate::errors::AppResult;
use crate::models::{Credentials, UserDto};
use crate::services::AppState;

pub async fn handle_register(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> AppResult<Json<UserDto>> {
    // Absent credentials fall through as blanks and fail validation.
    let user = state
        .users
        .register(
            credentials.username.as_deref().unwrap_or_default(),
            credentials.password.as_deref().unwrap_or_default(),
        )
        .await?;
    Ok(Json(UserDto::from(user)))
}

pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserDto>>> {
    let users = state.users.list_all().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}
