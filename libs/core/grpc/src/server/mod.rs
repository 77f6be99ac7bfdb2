//! gRPC server plumbing.
//!
//! ```ignore
//! use grpc_helpers::server::{AccessPolicy, AuthorizationLayer, GrpcServer, ServerConfig};
//! use rpc::user::user_service_server::{UserServiceServer, SERVICE_NAME};
//! use tonic::transport::Server;
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = GrpcServer::health_service();
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//!
//! Server::builder()
//!     .layer(AuthorizationLayer::new(policy))
//!     .add_service(health_service)
//!     .add_service(UserServiceServer::new(my_impl))
//!     .serve(config.resolve_addr().await?)
//!     .await?;
//! ```

pub mod authorization;
mod builder;
mod config;

pub use authorization::{
    AccessPolicy, AccessPolicyBuilder, AuthorizationLayer, AuthorizationService, MethodClass,
};
pub use builder::GrpcServer;
pub use config::ServerConfig;
