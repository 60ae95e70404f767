#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/valuelens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod fundamentals;
pub mod multiples;
pub mod profile;
pub mod ratio;
pub mod registry;
pub mod returns;
pub mod valuation;

pub use error::{MetricsError, Result};
pub use fundamentals::{CoreConfig, CoreFinancials, estimate_tax_rate};
pub use multiples::Multiples;
pub use profile::ProfileMetrics;
pub use ratio::{finite, growth, safe_div};
pub use returns::ReturnsOnCapital;
pub use valuation::ValuationMetrics;

// Re-export registry types for convenience
pub use registry::{
    MetricFormat, MetricInfo, MetricSection, available_metrics, get_metric_info,
    metrics_by_section,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
