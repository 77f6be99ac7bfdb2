//! # gRPC helpers
//!
//! Shared plumbing for the users gRPC server and the HTTP gateway that calls it:
//!
//! - **Authorization gate**: a tower layer that classifies every inbound call as
//!   public, authenticated or admin-only and verifies the bearer token before the
//!   call reaches any service.
//! - **Server setup**: env-driven `ServerConfig`, health reporting, startup logs.
//! - **Client channels**: lazily connected channels with per-request timeouts and
//!   a request-id interceptor.
//!
//! ## Server
//! ```ignore
//! use grpc_helpers::server::{AccessPolicy, AuthorizationLayer};
//!
//! let policy = AccessPolicy::builder(codec)
//!     .public(["/user.UserService/Login", "/user.UserService/Register"])
//!     .admin(["/user.UserService/GetUser"])
//!     .build();
//!
//! Server::builder()
//!     .layer(AuthorizationLayer::new(policy))
//!     .add_service(UserServiceServer::new(my_impl))
//!     .serve(addr)
//!     .await?;
//! ```
//!
//! ## Client
//! ```ignore
//! use grpc_helpers::{ChannelConfig, TracingInterceptor, create_channel_lazy_with_config};
//!
//! let channel = create_channel_lazy_with_config("http://[::1]:50051", ChannelConfig::default())?;
//! let client = UserServiceClient::with_interceptor(channel, TracingInterceptor::new());
//! ```

pub mod channel;
pub mod error;
pub mod interceptors;
pub mod server;
pub mod shutdown;

pub use channel::{ChannelConfig, create_channel_lazy, create_channel_lazy_with_config};
pub use error::{GrpcError, GrpcResult};
pub use interceptors::TracingInterceptor;
pub use shutdown::shutdown_signal;
