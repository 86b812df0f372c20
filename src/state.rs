use crate::client::BackendClient;
use crate::config::Config;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
    pub config: Config,
}

impl FromRef<AppState> for BackendClient {
    fn from_ref(state: &AppState) -> Self {
        state.backend.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
