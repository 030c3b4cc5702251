//! Error types for catalog lookups and scaling

use thiserror::Error;

/// Failures of the catalog and the scaling engine
///
/// Both are caller mistakes (a stale id, a bad radius), never transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("Celestial body not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
