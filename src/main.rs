// src/main.rs

use dotenvy::dotenv;
use examdesk::client::BackendClient;
use examdesk::config::Config;
use examdesk::routes;
use examdesk::state::AppState;
use std::net::SocketAddr;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    tracing::info!("Scoring backend at {}", config.backend_url);

    // One shared HTTP client; reqwest pools connections internally
    let http = reqwest::Client::new();
    let state = AppState {
        backend: BackendClient::new(http, config.backend_url.clone()),
        config: config.clone(),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Loopback only: this is a desktop companion, not a public service
    let addr = SocketAddr::from(([127, 0, 0, 1], config.listen_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    // Start the server
    axum::serve(listener, app).await.unwrap();
}
