pub mod config;

pub use config::ChannelConfig;

use crate::error::{GrpcError, GrpcResult};
use tonic::transport::{Channel, Endpoint};

/// Creates a lazy gRPC channel with default settings
///
/// Returns immediately; the connection is established on the first RPC, so the
/// caller can start before the upstream service is reachable.
///
/// ## Example
/// ```ignore
/// use grpc_helpers::create_channel_lazy;
/// use rpc::user::user_service_client::UserServiceClient;
///
/// let channel = create_channel_lazy("http://[::1]:50051")?;
/// let client = UserServiceClient::new(channel);
/// ```
pub fn create_channel_lazy(addr: impl Into<String>) -> GrpcResult<Channel> {
  create_channel_lazy_with_config(addr, ChannelConfig::default())
}

/// Creates a lazy gRPC channel with custom configuration
pub fn create_channel_lazy_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let addr_string = addr.into();

  let endpoint = Endpoint::from_shared(addr_string.clone()).map_err(|e| {
    tracing::error!(target: "grpc_helpers", addr = %addr_string, error = ?e, "Invalid URI");
    GrpcError::InvalidUri(e)
  })?;

  let endpoint = config.apply_to_endpoint(endpoint);

  tracing::debug!(
        target: "grpc_helpers",
        addr = %addr_string,
        "Creating lazy gRPC channel (connects on first request)"
    );

  Ok(endpoint.connect_lazy())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_invalid_uri() {
    let result = create_channel_lazy("not a valid uri");
    assert!(matches!(result, Err(GrpcError::InvalidUri(_))));
  }

  #[tokio::test]
  async fn test_lazy_channel_does_not_connect() {
    // Nothing listens here; a lazy channel must still be created.
    let result = create_channel_lazy("http://127.0.0.1:9");
    assert!(result.is_ok());
  }
}
