//! Shared application state.

use eyre::{Result, WrapErr};
use grpc_helpers::{ChannelConfig, TracingInterceptor, create_channel_lazy_with_config};
use rpc::user::user_service_client::UserServiceClient;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::Channel;

use crate::config::Config;

pub type UsersClient = UserServiceClient<InterceptedService<Channel, TracingInterceptor>>;

/// Cloned into every handler; clones share one HTTP/2 connection.
#[derive(Clone)]
pub struct AppState {
    pub users: UsersClient,
}

impl AppState {
    pub fn new(channel: Channel) -> Self {
        Self {
            users: UserServiceClient::with_interceptor(channel, TracingInterceptor::new()),
        }
    }

    /// Build state around a lazily connected channel; no I/O happens here.
    pub fn connect(config: &Config) -> Result<Self> {
        let channel_config = ChannelConfig::default().with_request_timeout(config.grpc_timeout);
        let channel = create_channel_lazy_with_config(config.grpc_endpoint.clone(), channel_config)
            .wrap_err("Failed to create gRPC channel")?;

        Ok(Self::new(channel))
    }
}
