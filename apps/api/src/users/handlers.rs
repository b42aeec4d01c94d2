use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::models::user::User;
use crate::resumes::service::list_user_resumes;
use crate::state::AppState;
use crate::users::service::{create_user, get_user, CreateUserRequest};

/// POST /users/
pub async fn handle_create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = create_user(state.store.as_ref(), &request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/
pub async fn handle_list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(state.store.list_users().await?))
}

/// GET /users/:id
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>, AppError> {
    Ok(Json(get_user(state.store.as_ref(), user_id).await?))
}

/// GET /users/:id/resumes
pub async fn handle_list_user_resumes(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Resume>>, AppError> {
    Ok(Json(list_user_resumes(state.store.as_ref(), user_id).await?))
}
