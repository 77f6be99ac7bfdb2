use thiserror::Error;

pub type GrpcResult<T> = Result<T, GrpcError>;

/// Errors raised while configuring gRPC clients and servers
#[derive(Error, Debug)]
pub enum GrpcError {
  /// Invalid URI provided for connection
  #[error("Invalid URI: {0}")]
  InvalidUri(#[from] tonic::transport::Error),

  /// Listen address could not be parsed
  #[error("Invalid listen address '{addr}': {source}")]
  InvalidAddr {
    addr: String,
    source: std::net::AddrParseError,
  },

  /// Listen host could not be resolved
  #[error("Cannot resolve listen address '{addr}': {source}")]
  Unresolvable {
    addr: String,
    source: std::io::Error,
  },
}
