//! HTTP → gRPC round trips: the gateway router talks to a real tonic server
//! (authorization layer included) backed by the in-memory repository.

use std::net::SocketAddr;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderValue, Request, StatusCode, header};
use core_auth::{JwtConfig, TokenCodec};
use domain_users::{InMemoryUserRepository, UserService};
use grpc_helpers::server::AuthorizationLayer;
use grpc_helpers::{ChannelConfig, create_channel_lazy_with_config};
use http_body_util::BodyExt;
use rpc::user::user_service_server::UserServiceServer;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tower::ServiceExt;
use users_gateway::{AppState, api};
use users_server::{UsersServiceImpl, access_policy};

const SECRET: &str = "gateway-test-secret-that-is-long-enough";

fn codec() -> TokenCodec {
    TokenCodec::new(&JwtConfig::new(SECRET))
}

async fn spawn_grpc() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let service = UserService::new(InMemoryUserRepository::new(), codec());
    let users = UserServiceServer::new(UsersServiceImpl::new(service));

    tokio::spawn(async move {
        Server::builder()
            .layer(AuthorizationLayer::new(access_policy(codec())))
            .add_service(users)
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    addr
}

async fn app() -> Router {
    let addr = spawn_grpc().await;
    let channel =
        create_channel_lazy_with_config(format!("http://{addr}"), ChannelConfig::default())
            .unwrap();
    api::app(AppState::new(channel))
}

/// App whose backend is never reachable; for requests that must not leave the gateway.
fn offline_app() -> Router {
    let channel =
        create_channel_lazy_with_config("http://127.0.0.1:1", ChannelConfig::default()).unwrap();
    api::app(AppState::new(channel))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&offline_app(), "GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_non_integer_id_is_bad_request() {
    let (status, body) = send(&offline_app(), "GET", "/v1/users/abc", None, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = offline_app();
    let request = Request::builder()
        .method("POST")
        .uri("/v1/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_and_login() {
    let app = app().await;

    let (status, user) = send(
        &app,
        "POST",
        "/v1/auth/register",
        None,
        Some(json!({"name": "John", "email": "john@example.com", "password": "hunter22"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["role"], "user");
    assert!(user.get("password").is_none());
    assert!(user.get("password_hash").is_none());

    let (status, body) = send(
        &app,
        "POST",
        "/v1/auth/login",
        None,
        Some(json!({"email": "john@example.com", "password": "hunter22"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap();
    assert_eq!(codec().verify(token).unwrap().role, "user");

    let (status, body) = send(
        &app,
        "POST",
        "/v1/auth/login",
        None,
        Some(json!({"email": "john@example.com", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHENTICATED");
    assert_eq!(body["error"]["message"], "invalid email or password");
}

#[tokio::test]
async fn test_non_ascii_credential_is_ignored_on_public_routes() {
    let app = app().await;
    let garbage = HeaderValue::from_bytes(b"Bearer \xff\xfe").unwrap();

    let register = Request::builder()
        .method("POST")
        .uri("/v1/auth/register")
        .header(header::AUTHORIZATION, garbage.clone())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"name": "Jane", "email": "jane@example.com", "password": "hunter22"})
                .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(register).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let get = Request::builder()
        .method("GET")
        .uri("/v1/users/1")
        .header(header::AUTHORIZATION, garbage)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(get).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["code"], "UNAUTHENTICATED");
    assert_eq!(body["error"]["message"], "token missing");
}

#[tokio::test]
async fn test_admin_routes_are_gated() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/v1/users/1", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHENTICATED");

    let user_token = codec().issue("john@example.com", "user").unwrap();
    let (status, body) = send(&app, "GET", "/v1/users/1", Some(&user_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "PERMISSION_DENIED");
}

#[tokio::test]
async fn test_admin_user_lifecycle() {
    let app = app().await;
    let admin = codec().issue("root@example.com", "admin").unwrap();

    let (status, created) = send(
        &app,
        "POST",
        "/v1/users",
        Some(&admin),
        Some(json!({"name": "Ops", "email": "ops@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = send(&app, "GET", &format!("/v1/users/{id}"), Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/v1/users/{id}"),
        Some(&admin),
        Some(json!({"name": "Ops Team", "email": "ops-team@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Ops Team");

    let (status, body) = send(&app, "DELETE", &format!("/v1/users/{id}"), Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted");

    let (status, body) = send(&app, "GET", &format!("/v1/users/{id}"), Some(&admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
