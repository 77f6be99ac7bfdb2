//! Health reporting and startup logging for gRPC servers.

use super::config::ServerConfig;
use tonic_health::ServingStatus;
use tonic_health::pb::health_server::{Health, HealthServer};
use tonic_health::server::HealthReporter;
use tracing::info;

pub struct GrpcServer;

impl GrpcServer {
    /// Create the `grpc.health.v1.Health` service and its reporter.
    pub fn health_service() -> (HealthReporter, HealthServer<impl Health>) {
        tonic_health::server::health_reporter()
    }

    pub fn log_startup(config: &ServerConfig, service_name: &str) {
        info!(
            addr = %config.addr_string(),
            service = service_name,
            compression = config.enable_compression,
            max_message_size = config.max_message_size,
            "gRPC server starting"
        );
    }

    /// Mark `service_name` and the empty service name as serving.
    ///
    /// The empty name is what generic health probes query.
    pub async fn setup_health(health_reporter: &HealthReporter, service_name: &str) {
        health_reporter
            .set_service_status(service_name, ServingStatus::Serving)
            .await;
        health_reporter
            .set_service_status("", ServingStatus::Serving)
            .await;

        info!(service = service_name, "Service marked as serving");
    }

    /// Flip both names to not-serving ahead of shutdown.
    pub async fn mark_not_serving(health_reporter: &HealthReporter, service_name: &str) {
        health_reporter
            .set_service_status(service_name, ServingStatus::NotServing)
            .await;
        health_reporter
            .set_service_status("", ServingStatus::NotServing)
            .await;
    }
}
