use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use super::generation::{GenerationError, GenerationGateway};
use crate::config::GenerationConfig;
use crate::models::Catalog;

/// Longest slice of an error body kept in [`GenerationError::Status`].
const MAX_ERROR_BODY: usize = 512;

/// HTTP client for a catalog generation service.
///
/// The service is called with an empty `POST` and answers with the catalog
/// JSON (`{"books": [...], "authors": [...], "comments": [...]}`).
#[derive(Clone)]
pub struct GenerationApiClient {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl GenerationApiClient {
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .with_context(|| format!("Invalid generation endpoint: {}", config.endpoint))?;

        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .user_agent(concat!("BookStream/", env!("CARGO_PKG_VERSION")));
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .context("Failed to build generation HTTP client")?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
        })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl GenerationGateway for GenerationApiClient {
    async fn generate(&self) -> Result<Catalog, GenerationError> {
        let mut request = self.client.post(self.endpoint.clone());
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        debug!(endpoint = %self.endpoint, "requesting catalog generation");
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "generation service returned an error");
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: truncate(body, MAX_ERROR_BODY),
            });
        }

        let catalog = Catalog::from_json(&body)?;
        debug!(
            books = catalog.books.len(),
            authors = catalog.authors.len(),
            comments = catalog.comments.len(),
            "catalog generated"
        );
        Ok(catalog)
    }
}

fn truncate(mut body: String, max: usize) -> String {
    if body.len() > max {
        let mut cut = max;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
        body.push('…');
    }
    body
}
