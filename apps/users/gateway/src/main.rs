use core_config::FromEnv;
use core_config::tracing::{init_tracing, install_color_eyre};
use eyre::{Result, WrapErr};
use tracing::info;
use users_gateway::{AppState, Config, api};

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let config = Config::from_env().wrap_err("Failed to load gateway configuration")?;
    init_tracing(&config.environment);

    info!(endpoint = %config.grpc_endpoint, "Using users gRPC service");
    let state = AppState::connect(&config)?;

    let listener = tokio::net::TcpListener::bind(config.server.address())
        .await
        .wrap_err_with(|| format!("Failed to bind {}", config.server.address()))?;
    info!("Gateway listening on {}", listener.local_addr()?);

    axum::serve(listener, api::app(state))
        .with_graceful_shutdown(grpc_helpers::shutdown_signal())
        .await
        .wrap_err("HTTP server failed")?;

    info!("Gateway shutdown complete");
    Ok(())
}
