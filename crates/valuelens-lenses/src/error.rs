//! Error types for lens and profile lookups.

use thiserror::Error;

/// Errors raised when resolving lenses or profiles by key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LensError {
    /// Key does not name a lens
    #[error("Unknown lens: {0} (expected one of burry, greenblatt, buffett, klarman, einhorn)")]
    UnknownLens(String),

    /// Key does not name an investor profile
    #[error("Unknown profile: {0} (expected one of graham, buffett, lynch, greenblatt, burry)")]
    UnknownProfile(String),
}

/// Result type for lens operations
pub type Result<T> = std::result::Result<T, LensError>;
