//! Recipe catalog error types.

use thiserror::Error;

use super::TransportError;

/// Errors returned when loading the recipe catalog.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum CatalogError {
    #[error("the server response was invalid (HTTP {status})")]
    InvalidResponse { status: u16 },

    #[error("failed to decode recipes: {0}")]
    Decoding(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl CatalogError {
    /// Returns whether the catalog body was malformed.
    #[must_use]
    pub const fn is_decoding(&self) -> bool {
        matches!(self, Self::Decoding(_))
    }
}
