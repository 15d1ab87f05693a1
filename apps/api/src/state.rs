use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
/// Rendering is stateless, so this only carries configuration.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
