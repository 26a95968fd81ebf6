pub mod fixture;
pub mod generation;
pub mod generation_api;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::GenerationConfig;

pub use fixture::FixtureGateway;
pub use generation::{GenerationError, GenerationGateway};
pub use generation_api::GenerationApiClient;

/// Builds the gateway selected by `config`.
///
/// A configured fixture file takes precedence over the HTTP endpoint.
pub fn build_gateway(config: &GenerationConfig) -> Result<Arc<dyn GenerationGateway>> {
    if let Some(path) = &config.fixture_path {
        info!("Using catalog fixture: {}", path.display());
        return Ok(Arc::new(FixtureGateway::new(path.clone())));
    }

    info!("Using generation service at {}", config.endpoint);
    Ok(Arc::new(GenerationApiClient::new(config)?))
}
