//! User account API handlers
//!
//! Thin wrappers over `UserService`: parse the request, delegate, map the
//! result into the response envelope and a status code.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{LoginRequest, UpdateRoleParams, UserDto, UserPayload};
use crate::application::users::UserService;
use crate::domain::DomainError;
use crate::infrastructure::database::repositories::UserRepository;
use crate::interfaces::http::common::ResponseEnvelope;

/// User handler state — concrete over `UserRepository` for Axum
/// compatibility.
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService<UserRepository>>,
}

fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::Validation(_) | DomainError::Conflict(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/users/register",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "User registered", body = ResponseEnvelope<UserDto>),
        (status = 400, description = "Validation failure or email already taken", body = ResponseEnvelope<UserDto>),
        (status = 500, description = "Store failure", body = ResponseEnvelope<UserDto>)
    )
)]
pub async fn register(
    State(state): State<UserHandlerState>,
    Json(payload): Json<UserPayload>,
) -> (StatusCode, Json<ResponseEnvelope<UserDto>>) {
    match state.user_service.register(payload.into()).await {
        Ok(user) => (
            StatusCode::OK,
            Json(ResponseEnvelope::success(UserDto::from(user))),
        ),
        Err(e) => (status_for(&e), Json(ResponseEnvelope::error(e.to_string()))),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/users/login",
    tag = "Users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ResponseEnvelope<UserDto>),
        (status = 400, description = "Incorrect password", body = ResponseEnvelope<UserDto>),
        (status = 404, description = "Unknown email", body = ResponseEnvelope<UserDto>)
    )
)]
pub async fn login(
    State(state): State<UserHandlerState>,
    Json(request): Json<LoginRequest>,
) -> (StatusCode, Json<ResponseEnvelope<UserDto>>) {
    match state
        .user_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(user) => (
            StatusCode::OK,
            Json(ResponseEnvelope::success(UserDto::from(user))),
        ),
        Err(e) => (status_for(&e), Json(ResponseEnvelope::error(e.to_string()))),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}/role",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User id"),
        UpdateRoleParams
    ),
    responses(
        (status = 200, description = "Role updated", body = ResponseEnvelope<UserDto>),
        (status = 400, description = "Invalid role", body = ResponseEnvelope<UserDto>),
        (status = 404, description = "Unknown user", body = ResponseEnvelope<UserDto>)
    )
)]
pub async fn update_role(
    State(state): State<UserHandlerState>,
    Path(id): Path<i64>,
    Query(params): Query<UpdateRoleParams>,
) -> (StatusCode, Json<ResponseEnvelope<UserDto>>) {
    match state.user_service.update_role(id, &params.new_role).await {
        Ok(user) => (
            StatusCode::OK,
            Json(ResponseEnvelope::success(UserDto::from(user))),
        ),
        Err(e) => (status_for(&e), Json(ResponseEnvelope::error(e.to_string()))),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}/profile",
    tag = "Users",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "Profile updated", body = ResponseEnvelope<UserDto>),
        (status = 400, description = "Validation failure", body = ResponseEnvelope<UserDto>),
        (status = 404, description = "Unknown user", body = ResponseEnvelope<UserDto>)
    )
)]
pub async fn update_profile(
    State(state): State<UserHandlerState>,
    Path(id): Path<i64>,
    Json(payload): Json<UserPayload>,
) -> (StatusCode, Json<ResponseEnvelope<UserDto>>) {
    match state.user_service.update_profile(id, payload.into()).await {
        Ok(user) => (
            StatusCode::OK,
            Json(ResponseEnvelope::success_with_message(
                UserDto::from(user),
                "User updated successfully",
            )),
        ),
        Err(e) => (status_for(&e), Json(ResponseEnvelope::error(e.to_string()))),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = ResponseEnvelope<String>),
        (status = 404, description = "Unknown user", body = ResponseEnvelope<String>)
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i64>,
) -> (StatusCode, Json<ResponseEnvelope<String>>) {
    match state.user_service.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ResponseEnvelope::success(
                "User deleted successfully".to_string(),
            )),
        ),
        Err(e) => (status_for(&e), Json(ResponseEnvelope::error(e.to_string()))),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = ResponseEnvelope<Vec<UserDto>>),
        (status = 500, description = "Store failure", body = ResponseEnvelope<Vec<UserDto>>)
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
) -> (StatusCode, Json<ResponseEnvelope<Vec<UserDto>>>) {
    match state.user_service.list_all().await {
        Ok(users) => (
            StatusCode::OK,
            Json(ResponseEnvelope::success(
                users.into_iter().map(UserDto::from).collect(),
            )),
        ),
        Err(e) => (status_for(&e), Json(ResponseEnvelope::error(e.to_string()))),
    }
}
