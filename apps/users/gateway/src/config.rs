use core_config::{ConfigError, Environment, FromEnv, env_or_default, env_parse, server::ServerConfig};
use std::time::Duration;

const DEFAULT_GRPC_ENDPOINT: &str = "http://localhost:50051";
const DEFAULT_GRPC_TIMEOUT_SECS: u64 = 5;

/// Gateway configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    /// Users gRPC service URI
    pub grpc_endpoint: String,
    /// Deadline applied to every gRPC call
    pub grpc_timeout: Duration,
    pub environment: Environment,
}

impl FromEnv for Config {
    /// Reads:
    /// - `HOST` / `PORT` (default: 0.0.0.0:8080)
    /// - `GRPC_ENDPOINT` (default: http://localhost:50051)
    /// - `GRPC_TIMEOUT_SECS` (default: 5)
    /// - `APP_ENV`
    fn from_env() -> Result<Self, ConfigError> {
        let server = ServerConfig::from_env()?;
        let grpc_endpoint = env_or_default("GRPC_ENDPOINT", DEFAULT_GRPC_ENDPOINT);
        let timeout_secs = env_parse("GRPC_TIMEOUT_SECS", DEFAULT_GRPC_TIMEOUT_SECS)?;

        Ok(Self {
            server,
            grpc_endpoint,
            grpc_timeout: Duration::from_secs(timeout_secs),
            environment: Environment::from_env(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars(
            [
                ("HOST", None::<&str>),
                ("PORT", None),
                ("GRPC_ENDPOINT", None),
                ("GRPC_TIMEOUT_SECS", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.grpc_endpoint, "http://localhost:50051");
                assert_eq!(config.grpc_timeout, Duration::from_secs(5));
            },
        );
    }

    #[test]
    fn test_overrides() {
        temp_env::with_vars(
            [
                ("PORT", Some("9000")),
                ("GRPC_ENDPOINT", Some("http://users:50051")),
                ("GRPC_TIMEOUT_SECS", Some("2")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.server.port, 9000);
                assert_eq!(config.grpc_endpoint, "http://users:50051");
                assert_eq!(config.grpc_timeout, Duration::from_secs(2));
            },
        );
    }

    #[test]
    fn test_bad_timeout() {
        temp_env::with_var("GRPC_TIMEOUT_SECS", Some("soon"), || {
            assert!(matches!(
                Config::from_env(),
                Err(ConfigError::ParseError { .. })
            ));
        });
    }
}
