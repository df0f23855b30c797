//! Strategy Wizard HTTP server.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use strategy_wizard::adapters::{build_app, InMemoryWizardSessionRepository};
use strategy_wizard::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let addr = config.server.socket_addr();
    let repository = Arc::new(
        InMemoryWizardSessionRepository::new(config.sessions.max_sessions)
            .with_idle_timeout(config.sessions.idle_timeout()),
    );
    let app = build_app(&config, repository);

    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        max_sessions = config.sessions.max_sessions,
        idle_timeout_secs = config.sessions.idle_timeout_secs,
        "Starting strategy wizard server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.features.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
