//! gRPC server initialization and lifecycle management
//!
//! - Tracing initialization
//! - Database connection and migrations
//! - Access policy for the authorization layer
//! - gRPC server configuration, health service and graceful shutdown

use core_auth::{JwtConfig, TokenCodec};
use core_config::{Environment, FromEnv};
use database::postgres::{
    PostgresConfig, check_health, connect_from_config_with_retry, run_migrations,
};
use domain_users::{PgUserRepository, UserService};
use eyre::{Result, WrapErr};
use grpc_helpers::server::{AccessPolicy, AuthorizationLayer, GrpcServer, ServerConfig};
use grpc_helpers::shutdown_signal;
use migration::Migrator;
use rpc::user::user_service_server::{SERVICE_NAME, UserServiceServer};
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tracing::info;

use crate::service::UsersServiceImpl;

const PUBLIC_METHODS: [&str; 2] = ["Login", "Register"];
const ADMIN_METHODS: [&str; 4] = ["CreateUser", "GetUser", "UpdateUser", "DeleteUser"];
const HEALTH_METHODS: [&str; 2] = [
    "/grpc.health.v1.Health/Check",
    "/grpc.health.v1.Health/Watch",
];

fn method_path(method: &str) -> String {
    format!("/{SERVICE_NAME}/{method}")
}

/// Access rules for `user.UserService`.
///
/// Login and Register are open, as are health probes. Every other user
/// method requires an admin token.
pub fn access_policy(codec: TokenCodec) -> AccessPolicy {
    AccessPolicy::builder(codec)
        .public(PUBLIC_METHODS.iter().map(|m| method_path(m)))
        .public(HEALTH_METHODS)
        .admin(ADMIN_METHODS.iter().map(|m| method_path(m)))
        .build()
}

/// Run the gRPC server
///
/// 1. Sets up structured logging (JSON for prod, pretty for dev)
/// 2. Loads gRPC, database and token configuration
/// 3. Connects to the database with retry and applies migrations
/// 4. Serves `user.UserService` behind the authorization layer until SIGINT/SIGTERM
///
/// # Errors
///
/// Returns an error if configuration is missing or invalid, the database is
/// unreachable after retries, migrations fail or the listener cannot bind.
pub async fn run() -> Result<()> {
    let environment = Environment::from_env();
    core_config::tracing::init_tracing(&environment);

    let config = ServerConfig::from_env().wrap_err("Failed to load gRPC server configuration")?;
    let db_config =
        PostgresConfig::from_env().wrap_err("Failed to load database configuration")?;
    let jwt_config = JwtConfig::from_env().wrap_err("Failed to load token configuration")?;

    info!("Connecting to database...");
    let db = connect_from_config_with_retry(db_config, None)
        .await
        .wrap_err("Failed to connect to database")?;
    check_health(&db).await.wrap_err("Database health check failed")?;
    run_migrations::<Migrator>(&db, "users")
        .await
        .wrap_err("Failed to run database migrations")?;

    let codec = TokenCodec::new(&jwt_config);
    let policy = access_policy(codec.clone());

    let service = UserService::new(PgUserRepository::new(db), codec);
    let mut users = UserServiceServer::new(UsersServiceImpl::new(service))
        .max_decoding_message_size(config.max_message_size)
        .max_encoding_message_size(config.max_message_size);
    if config.enable_compression {
        users = users
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd);
    }

    let addr = config.resolve_addr().await?;
    let (health_reporter, health_service) = GrpcServer::health_service();
    GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
    GrpcServer::log_startup(&config, SERVICE_NAME);

    Server::builder()
        .layer(AuthorizationLayer::new(policy))
        .add_service(health_service)
        .add_service(users)
        .serve_with_shutdown(addr, async {
            shutdown_signal().await;
            GrpcServer::mark_not_serving(&health_reporter, SERVICE_NAME).await;
        })
        .await
        .wrap_err("gRPC server failed")?;

    info!("Server shut down");
    Ok(())
}
