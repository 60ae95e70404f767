#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/valuelens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod kind;
pub mod lens;
pub mod profile;
pub mod verdict;

pub use error::{LensError, Result};
pub use kind::LensKind;
pub use lens::{
    BuffettConfig, BuffettLens, BurryConfig, BurryLens, EinhornConfig, EinhornLens,
    GreenblattConfig, GreenblattLens, KlarmanConfig, KlarmanLens, Lens,
};
pub use profile::{ProfileAssessment, ProfileKind, ProfileSummary, RuleCheck, RuleStatus};
pub use verdict::{KeyMetric, Verdict};

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
