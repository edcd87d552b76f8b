use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};

use crate::errors::AppResult;
use crate::models::{category, CategoryPayload};
use crate::services::AppState;

pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CategoryPayload>,
) -> AppResult<Json<category::Model>> {
    let category = state.categories.create(&payload.name).await?;
    Ok(Json(category))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<category::Model>> {
    Ok(Json(state.categories.get_by_id(id).await?))
}

pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<category::Model>>> {
    Ok(Json(state.categories.list_all().await?))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.categories.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
