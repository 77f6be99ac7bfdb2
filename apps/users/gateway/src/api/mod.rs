use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, HeaderValue, Method, header::AUTHORIZATION};
use axum::{Json, Router};
use grpc_helpers::interceptors::REQUEST_ID_HEADER;
use tonic::metadata::{Ascii, MetadataValue};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

pub mod auth;
pub mod health;
pub mod users;

/// Full application router: versioned API, health, tracing and CORS.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/v1/auth", auth::router(state.clone()))
        .nest("/v1/users", users::router(state))
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

/// Wrap `message` in a gRPC request, copying `Authorization` and `x-request-id`
/// from the inbound headers unchanged.
///
/// A header that is not valid ASCII metadata is dropped, so gated methods see
/// no credential and public ones proceed as usual.
pub(crate) fn grpc_request<T>(headers: &HeaderMap, message: T) -> tonic::Request<T> {
    let mut request = tonic::Request::new(message);

    if let Some(value) = headers.get(AUTHORIZATION) {
        match ascii_metadata(value) {
            Some(value) => {
                request.metadata_mut().insert("authorization", value);
            }
            None => debug!("dropping non-ASCII authorization header"),
        }
    }

    if let Some(value) = headers.get(REQUEST_ID_HEADER)
        && let Some(value) = ascii_metadata(value)
    {
        request.metadata_mut().insert(REQUEST_ID_HEADER, value);
    }

    request
}

fn ascii_metadata(value: &HeaderValue) -> Option<MetadataValue<Ascii>> {
    value.to_str().ok()?.parse().ok()
}

/// Unwrap a JSON body, reporting malformed input in the standard error shape.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grpc_request_forwards_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-1"));

        let request = grpc_request(&headers, ());
        let metadata = request.metadata();

        assert_eq!(metadata.get("authorization").unwrap(), "Bearer abc.def.ghi");
        assert_eq!(metadata.get(REQUEST_ID_HEADER).unwrap(), "req-1");
    }

    #[test]
    fn test_grpc_request_without_headers() {
        let request = grpc_request(&HeaderMap::new(), ());
        assert!(request.metadata().get("authorization").is_none());
    }

    #[test]
    fn test_grpc_request_drops_non_ascii_authorization() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_bytes(b"Bearer \xff\xfe").unwrap());
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-2"));

        let request = grpc_request(&headers, ());
        assert!(request.metadata().get("authorization").is_none());
        assert_eq!(request.metadata().get(REQUEST_ID_HEADER).unwrap(), "req-2");
    }
}
