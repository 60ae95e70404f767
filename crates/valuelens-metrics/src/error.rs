//! Error types for metric lookups.

use thiserror::Error;

/// Errors that can occur when reading metrics
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Metric key not in the registry
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),
}

/// Result type for metric operations
pub type Result<T> = std::result::Result<T, MetricsError>;
