use std::net::SocketAddr;

use tokio::signal;
use tracing::{error, info};

use portfolio_api::{
    catalog::StaticCatalog, config::Config, middleware::init_tracing, notifier::Notifier,
    AppState,
};

#[tokio::main]
async fn main() {
    // Load configuration from environment first so DEBUG can raise verbosity
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize structured logging
    if let Err(e) = init_tracing(config.debug) {
        eprintln!("Failed to initialize tracing: {e}");
        std::process::exit(1);
    }
    info!("Configuration loaded successfully");

    if !config.telegram.is_configured() {
        info!("Telegram credentials not set; contact notifications will be skipped");
    }

    let notifier = match Notifier::new(config.telegram.clone()) {
        Ok(notifier) => notifier,
        Err(e) => {
            error!("Failed to initialize notifier: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(notifier, StaticCatalog::with_default_projects());
    let app = portfolio_api::create_router(state);

    // Create socket address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            info!("Server listening on {}", addr);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Start the server with graceful shutdown handling
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Graceful shutdown signal handler
/// Listens for SIGTERM and SIGINT signals
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, initiating graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM signal, initiating graceful shutdown");
        },
    }
}
