use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
};
use tower_sessions::Session;

use crate::errors::{AppError, AppResult};
use crate::middleware::SESSION_USER_KEY;
use crate::models::task::{self, SearchResult};
use crate::models::{ListParams, TaskFilter, TaskPayload};
use crate::services::AppState;

// Resolves the calling user from the session established at login.
async fn current_user_id(session: &Session) -> AppResult<i64> {
    session
        .get::<i64>(SESSION_USER_KEY)
        .await?
        .ok_or(AppError::AuthenticationFailed)
}

pub async fn create_task(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<TaskPayload>,
) -> AppResult<Json<task::Model>> {
    let creator_id = current_user_id(&session).await?;
    tracing::debug!("Creating task for user {}", creator_id);

    let task = state.tasks.create(creator_id, payload).await?;
    Ok(Json(task))
}

pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<task::Model>> {
    Ok(Json(state.tasks.get_by_id(id).await?))
}

pub async fn list_all_tasks(State(state): State<AppState>) -> AppResult<Json<Vec<task::Model>>> {
    Ok(Json(state.tasks.list_all().await?))
}

pub async fn search_tasks(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
    Json(filter): Json<TaskFilter>,
) -> AppResult<Json<SearchResult>> {
    let result = state
        .tasks
        .search(&filter, params.offset, &params.order_by, params.ascending)
        .await?;
    Ok(Json(result))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> AppResult<Json<task::Model>> {
    Ok(Json(state.tasks.update(id, payload).await?))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.tasks.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
