//! The generation gateway contract.
//!
//! A gateway produces a complete [`Catalog`] from nothing. It is the only
//! suspending operation in the browser; everything else is synchronous.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Catalog;

/// Why a generation produced no catalog.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Generation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Generation service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Generated catalog is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Failed to read catalog file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Free-form failure reported by the gateway itself.
    #[error("{0}")]
    Unavailable(String),
}

impl GenerationError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Human-readable message shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// External collaborator that (re)populates the catalog.
///
/// # Examples
///
/// ```rust
/// use bookstream::clients::{GenerationError, GenerationGateway};
/// use bookstream::models::Catalog;
///
/// struct Offline;
///
/// #[async_trait::async_trait]
/// impl GenerationGateway for Offline {
///     async fn generate(&self) -> Result<Catalog, GenerationError> {
///         Err(GenerationError::unavailable("network error"))
///     }
/// }
/// ```
#[async_trait::async_trait]
pub trait GenerationGateway: Send + Sync {
    /// Generates a fresh catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] when the service cannot be reached,
    /// answers with an error status, or returns a payload that is not a
    /// catalog.
    async fn generate(&self) -> Result<Catalog, GenerationError>;
}
