// src/config.rs

use std::env;

use dotenvy::dotenv;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the scoring backend.
    pub backend_url: Url,
    /// Port the companion service listens on, loopback only.
    pub listen_port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let backend_url = env::var("BACKEND_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
        let backend_url = Url::parse(&backend_url).expect("BACKEND_URL must be a valid URL");

        let listen_port = env::var("LISTEN_PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(3000);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            backend_url,
            listen_port,
            rust_log,
        }
    }
}
