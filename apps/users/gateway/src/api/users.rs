//! Administrative user routes. The gRPC server decides who may call them.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use domain_users::conversions::update_request;
use domain_users::{CreateUser, UpdateUser, UserResponse};
use rpc::user::{self as proto, CreateUserRequest, DeleteUserRequest, GetUserRequest};
use serde::Serialize;
use tonic::Status;

use super::{grpc_request, json_body};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(state)
}

fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid user id: {raw}")))
}

/// Unwrap the record carried by a `UserResponse`.
pub(crate) fn user_from(response: proto::UserResponse) -> Result<UserResponse, ApiError> {
    response
        .user
        .map(Into::into)
        .ok_or_else(|| Status::internal("response carried no user").into())
}

/// POST /v1/users
pub async fn create_user(
    State(mut state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateUser>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let input = json_body(payload)?;
    let request = grpc_request(&headers, CreateUserRequest::from(input));

    let response = state.users.create_user(request).await?;

    Ok((StatusCode::CREATED, Json(user_from(response.into_inner())?)))
}

/// GET /v1/users/{id}
pub async fn get_user(
    State(mut state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_id(&id)?;
    let request = grpc_request(&headers, GetUserRequest { id });

    let response = state.users.get_user(request).await?;

    Ok(Json(user_from(response.into_inner())?))
}

/// PUT /v1/users/{id}
pub async fn update_user(
    State(mut state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUser>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_id(&id)?;
    let input = json_body(payload)?;
    let request = grpc_request(&headers, update_request(id, input));

    let response = state.users.update_user(request).await?;

    Ok(Json(user_from(response.into_inner())?))
}

/// DELETE /v1/users/{id}
pub async fn delete_user(
    State(mut state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    let request = grpc_request(&headers, DeleteUserRequest { id });

    let response = state.users.delete_user(request).await?;

    Ok(Json(MessageResponse {
        message: response.into_inner().message,
    }))
}
