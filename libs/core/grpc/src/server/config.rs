//! Server configuration loaded from environment variables.

use crate::error::{GrpcError, GrpcResult};
use core_config::{ConfigError, FromEnv, env_or_default, env_parse};
use std::io;
use std::net::SocketAddr;

const DEFAULT_MAX_MESSAGE_SIZE: usize = 4 * 1024 * 1024;

/// Configuration for the gRPC server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to (default: 0.0.0.0)
    pub host: String,
    /// Port to listen on (default: 50051)
    pub port: u16,
    /// Enable Zstd compression (default: true)
    pub enable_compression: bool,
    /// Maximum decoded/encoded message size (default: 4MB)
    pub max_message_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 50051,
            enable_compression: true,
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
        }
    }
}

impl FromEnv for ServerConfig {
    /// Reads:
    /// - `GRPC_HOST` (default: 0.0.0.0)
    /// - `GRPC_PORT` (default: 50051)
    /// - `GRPC_COMPRESSION` (default: true)
    /// - `GRPC_MAX_MESSAGE_SIZE` (default: 4194304)
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("GRPC_HOST", "0.0.0.0");
        let port = env_parse("GRPC_PORT", 50051u16)?;
        let enable_compression = env_parse("GRPC_COMPRESSION", true)?;
        let max_message_size = env_parse("GRPC_MAX_MESSAGE_SIZE", DEFAULT_MAX_MESSAGE_SIZE)?;

        Ok(Self {
            host,
            port,
            enable_compression,
            max_message_size,
        })
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_compression(mut self, enable: bool) -> Self {
        self.enable_compression = enable;
        self
    }

    /// Get the socket address to bind to. The host must be an IP literal.
    pub fn socket_addr(&self) -> GrpcResult<SocketAddr> {
        let addr = self.addr_string();
        addr.parse()
            .map_err(|source| GrpcError::InvalidAddr { addr, source })
    }

    /// Like [`socket_addr`](Self::socket_addr), but hostnames such as
    /// `localhost` are resolved through DNS. The first address wins.
    pub async fn resolve_addr(&self) -> GrpcResult<SocketAddr> {
        if let Ok(addr) = self.socket_addr() {
            return Ok(addr);
        }

        let addr = self.addr_string();
        let resolved = match tokio::net::lookup_host(addr.clone()).await {
            Ok(mut addrs) => addrs.next(),
            Err(source) => return Err(GrpcError::Unresolvable { addr, source }),
        };
        resolved.ok_or_else(|| GrpcError::Unresolvable {
            addr,
            source: io::Error::new(io::ErrorKind::NotFound, "no addresses found"),
        })
    }

    /// Get the address string (for logging).
    pub fn addr_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 50051);
        assert!(config.enable_compression);
        assert_eq!(config.socket_addr().unwrap().port(), 50051);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ServerConfig::new()
            .with_host("[::1]")
            .with_port(6000)
            .with_compression(false);

        assert_eq!(config.addr_string(), "[::1]:6000");
        assert!(config.socket_addr().is_ok());
        assert!(!config.enable_compression);
    }

    #[test]
    fn test_from_env() {
        temp_env::with_vars(
            [
                ("GRPC_HOST", Some("127.0.0.1")),
                ("GRPC_PORT", Some("50052")),
                ("GRPC_COMPRESSION", Some("false")),
                ("GRPC_MAX_MESSAGE_SIZE", None),
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.addr_string(), "127.0.0.1:50052");
                assert!(!config.enable_compression);
                assert_eq!(config.max_message_size, DEFAULT_MAX_MESSAGE_SIZE);
            },
        );
    }

    #[test]
    fn test_from_env_bad_port() {
        temp_env::with_var("GRPC_PORT", Some("not-a-port"), || {
            assert!(ServerConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_invalid_host() {
        let config = ServerConfig::new().with_host("not a host");
        assert!(matches!(
            config.socket_addr(),
            Err(GrpcError::InvalidAddr { .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_hostname() {
        let config = ServerConfig::new().with_host("localhost").with_port(50053);
        assert!(config.socket_addr().is_err());

        let addr = config.resolve_addr().await.unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 50053);
    }

    #[tokio::test]
    async fn test_resolve_ip_literal() {
        let config = ServerConfig::new().with_host("127.0.0.1").with_port(50054);
        assert_eq!(
            config.resolve_addr().await.unwrap(),
            "127.0.0.1:50054".parse::<SocketAddr>().unwrap()
        );
    }
}
