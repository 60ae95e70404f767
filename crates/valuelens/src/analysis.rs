//! The end-to-end analysis pipeline.

use crate::error::Result;
use tracing::{debug, info};
use valuelens_data::{FinancialsSource, QuarterlyFinancials, Ticker};
use valuelens_lenses::{LensKind, ProfileAssessment, ProfileKind, Verdict};
use valuelens_metrics::{CoreConfig, ValuationMetrics};
use valuelens_output::{ReportBuilder, ValuationReport, pdf_file_name, render_pdf};

/// One ticker run through one lens.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Symbol analysed
    pub ticker: Ticker,
    /// Lens applied
    pub lens: LensKind,
    /// Statements the metrics were computed from
    pub financials: QuarterlyFinancials,
    /// Computed metrics
    pub metrics: ValuationMetrics,
    /// Lens verdict
    pub verdict: Verdict,
    /// Checklist of the profile sharing the lens key, or of an explicitly chosen profile
    pub profile: Option<ProfileAssessment>,
}

impl Analysis {
    /// Fetch statements for `ticker` and evaluate them under `lens`.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker is malformed or the source fails.
    pub async fn run(source: &dyn FinancialsSource, ticker: &str, lens: LensKind) -> Result<Self> {
        let ticker = Ticker::parse(ticker)?;
        debug!(ticker = %ticker, source = source.name(), "fetching quarterly statements");
        let financials = source.fetch_quarterly(&ticker).await?;
        let analysis = Self::from_financials(financials, lens);
        info!(
            ticker = %analysis.ticker,
            lens = %lens,
            verdict = analysis.verdict.verdict,
            "analysis complete"
        );
        Ok(analysis)
    }

    /// Evaluate already-fetched statements.
    pub fn from_financials(financials: QuarterlyFinancials, lens: LensKind) -> Self {
        Self::from_financials_with(financials, lens, &CoreConfig::default())
    }

    /// Evaluate already-fetched statements with a custom metric configuration.
    pub fn from_financials_with(
        financials: QuarterlyFinancials,
        lens: LensKind,
        config: &CoreConfig,
    ) -> Self {
        let metrics = ValuationMetrics::compute_with(&financials, config);
        let verdict = lens.evaluate(&metrics);
        let profile = ProfileKind::for_lens(lens).map(|p| p.assess(&metrics.profile));
        Self {
            ticker: financials.ticker.clone(),
            lens,
            financials,
            metrics,
            verdict,
            profile,
        }
    }

    /// Replace the lens-default checklist with `kind`.
    pub fn with_profile(mut self, kind: ProfileKind) -> Self {
        debug!(ticker = %self.ticker, profile = kind.key(), "assessing explicit profile");
        self.profile = Some(kind.assess(&self.metrics.profile));
        self
    }

    /// Build the report for display or export.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be assembled.
    pub fn report(&self) -> Result<ValuationReport> {
        Ok(ReportBuilder::new()
            .ticker(self.ticker.as_str())
            .lens(self.lens)
            .metrics(self.metrics)
            .verdict(self.verdict.clone())
            .profile(self.profile.clone())
            .build()?)
    }

    /// Render the one-page PDF summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be built or rendered.
    pub fn pdf(&self) -> Result<Vec<u8>> {
        Ok(render_pdf(&self.report()?)?)
    }

    /// File name for the PDF summary.
    pub fn pdf_file_name(&self) -> String {
        pdf_file_name(self.ticker.as_str(), self.lens)
    }
}
