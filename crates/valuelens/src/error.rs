//! Error types for the analysis pipeline.

use thiserror::Error;
use valuelens_data::DataError;
use valuelens_lenses::LensError;
use valuelens_output::{ExportError, PdfError, ReportError};

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur while running an analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Fetching or parsing statements failed
    #[error(transparent)]
    Data(#[from] DataError),

    /// Unknown lens or profile
    #[error(transparent)]
    Lens(#[from] LensError),

    /// Report could not be built or serialized
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Export failed
    #[error(transparent)]
    Export(#[from] ExportError),

    /// PDF rendering failed
    #[error(transparent)]
    Pdf(#[from] PdfError),
}

impl AnalysisError {
    /// Whether submitting the same request again may succeed.
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Data(err) => err.is_retryable(),
            _ => false,
        }
    }

    /// Whether the user supplied bad input rather than the provider failing.
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Data(DataError::InvalidSymbol(_)) | Self::Lens(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let err = AnalysisError::from(DataError::InvalidSymbol(String::new()));
        assert!(err.is_user_error());
        assert!(!err.is_retryable());

        let err = AnalysisError::from(DataError::MissingData {
            symbol: "AAPL".to_string(),
            reason: "empty response".to_string(),
        });
        assert!(err.is_retryable());
        assert!(!err.is_user_error());
        assert_eq!(err.to_string(), "Missing data for AAPL: empty response");
    }
}
