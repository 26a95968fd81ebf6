use std::path::PathBuf;

use tracing::debug;

use super::generation::{GenerationError, GenerationGateway};
use crate::models::Catalog;

/// Gateway that reads a catalog JSON file on every call.
///
/// Useful offline and in tests. Editing the file between refreshes yields a
/// different catalog, just like a real generation would.
#[derive(Debug, Clone)]
pub struct FixtureGateway {
    path: PathBuf,
}

impl FixtureGateway {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl GenerationGateway for FixtureGateway {
    async fn generate(&self) -> Result<Catalog, GenerationError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| GenerationError::Io {
                path: self.path.clone(),
                source,
            })?;

        let catalog = Catalog::from_json(&content)?;
        debug!(
            path = %self.path.display(),
            books = catalog.books.len(),
            "loaded catalog fixture"
        );
        Ok(catalog)
    }
}
