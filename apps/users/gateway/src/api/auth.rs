//! Public account routes: sign-up and login.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use domain_users::{LoginUser, RegisterUser, UserResponse};
use rpc::user::{LoginRequest, RegisterRequest};
use serde::Serialize;

use super::{grpc_request, json_body};
use crate::api::users::user_from;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(state)
}

/// POST /v1/auth/register
pub async fn register(
    State(mut state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<RegisterUser>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let input = json_body(payload)?;
    let request = grpc_request(&headers, RegisterRequest::from(input));

    let response = state.users.register(request).await?;
    let user: UserResponse = user_from(response.into_inner())?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /v1/auth/login
pub async fn login(
    State(mut state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<LoginUser>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let input = json_body(payload)?;
    let request = grpc_request(&headers, LoginRequest::from(input));

    let response = state.users.login(request).await?;

    Ok(Json(TokenResponse {
        token: response.into_inner().token,
    }))
}
