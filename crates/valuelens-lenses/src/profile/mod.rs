//! Investor Profiles
//!
//! Checklists in the style of well-known investors. Each rule grades one
//! ratio from [`ProfileMetrics`] as pass, warn, fail or na (input missing),
//! and the assessment closes with a one-line headline.

mod buffett;
mod burry;
mod graham;
mod greenblatt;
mod lynch;

use crate::error::LensError;
use crate::kind::LensKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use valuelens_metrics::ProfileMetrics;

/// The five investor profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// Benjamin Graham
    Graham,
    /// Warren Buffett
    Buffett,
    /// Peter Lynch
    Lynch,
    /// Joel Greenblatt
    Greenblatt,
    /// Michael Burry
    Burry,
}

impl ProfileKind {
    /// All profiles in display order.
    pub const ALL: [Self; 5] = [
        Self::Graham,
        Self::Buffett,
        Self::Lynch,
        Self::Greenblatt,
        Self::Burry,
    ];

    /// Lowercase key.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Graham => "graham",
            Self::Buffett => "buffett",
            Self::Lynch => "lynch",
            Self::Greenblatt => "greenblatt",
            Self::Burry => "burry",
        }
    }

    /// Investor's full name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Graham => "Benjamin Graham",
            Self::Buffett => "Warren Buffett",
            Self::Lynch => "Peter Lynch",
            Self::Greenblatt => "Joel Greenblatt",
            Self::Burry => "Michael Burry",
        }
    }

    /// Surname, used in headlines.
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::Graham => "Graham",
            Self::Buffett => "Buffett",
            Self::Lynch => "Lynch",
            Self::Greenblatt => "Greenblatt",
            Self::Burry => "Burry",
        }
    }

    /// Display label with style.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Graham => "Graham – Deep Value",
            Self::Buffett => "Buffett – Quality at Fair Price",
            Self::Lynch => "Lynch – GARP (PEG)",
            Self::Greenblatt => "Greenblatt – Magic Formula",
            Self::Burry => "Burry – Deep FCF Value",
        }
    }

    /// Style category.
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Graham | Self::Burry => "Deep Value",
            Self::Buffett => "Quality",
            Self::Lynch => "GARP",
            Self::Greenblatt => "Deep Value / Quality",
        }
    }

    /// One-line description.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Graham => {
                "Low multiples, strong balance sheet, and classic Ben Graham safeguards."
            }
            Self::Buffett => {
                "High-quality, high-ROE businesses with conservative leverage at sensible valuations."
            }
            Self::Lynch => "Growth at a reasonable price; PEG around 1 with decent balance sheet.",
            Self::Greenblatt => {
                "High earnings yield and high return on capital, Magic Formula style."
            }
            Self::Burry => "Cheap on free cash flow with an acceptable balance sheet.",
        }
    }

    /// Profile sharing a lens's investor, if any.
    pub const fn for_lens(lens: LensKind) -> Option<Self> {
        match lens {
            LensKind::Burry => Some(Self::Burry),
            LensKind::Greenblatt => Some(Self::Greenblatt),
            LensKind::Buffett => Some(Self::Buffett),
            LensKind::Klarman | LensKind::Einhorn => None,
        }
    }

    /// Run the checklist.
    pub fn assess(&self, metrics: &ProfileMetrics) -> ProfileAssessment {
        let rules = match self {
            Self::Graham => graham::rules(metrics),
            Self::Buffett => buffett::rules(metrics),
            Self::Lynch => lynch::rules(metrics),
            Self::Greenblatt => greenblatt::rules(metrics),
            Self::Burry => burry::rules(metrics),
        };
        let summary = ProfileSummary::from_rules(&rules, self.short_name());
        ProfileAssessment {
            profile: *self,
            rules,
            summary,
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProfileKind {
    type Err = LensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| LensError::UnknownProfile(s.to_string()))
    }
}

/// Outcome of one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    /// Meets the threshold
    Pass,
    /// Near the threshold
    Warn,
    /// Misses the threshold
    Fail,
    /// Input not available
    Na,
}

impl RuleStatus {
    /// Lowercase label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warn => "warn",
            Self::Fail => "fail",
            Self::Na => "na",
        }
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One graded checklist row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleCheck {
    /// What is checked
    pub name: &'static str,
    /// Threshold in words
    pub condition: &'static str,
    /// Observed value
    pub value: Option<f64>,
    /// Whether the value is a fraction shown as a percentage
    pub percent: bool,
    /// Grade
    pub status: RuleStatus,
    /// Short explanation
    pub comment: &'static str,
}

impl RuleCheck {
    /// Value as displayed: `—` when missing, one-decimal percent or two-decimal number.
    pub fn display_value(&self) -> String {
        match self.value {
            None => "—".to_string(),
            Some(v) if self.percent => format!("{:.1}%", v * 100.0),
            Some(v) => format!("{v:.2}"),
        }
    }
}

/// Grade counts and headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    /// Rules passed
    pub passes: usize,
    /// Rules with warnings
    pub warns: usize,
    /// Rules failed
    pub fails: usize,
    /// One-line conclusion
    pub headline: String,
}

impl ProfileSummary {
    fn from_rules(rules: &[RuleCheck], investor: &str) -> Self {
        let count = |status: RuleStatus| rules.iter().filter(|r| r.status == status).count();
        let (passes, warns, fails) = (
            count(RuleStatus::Pass),
            count(RuleStatus::Warn),
            count(RuleStatus::Fail),
        );
        let headline = if fails == 0 && passes >= 4 {
            format!("Very {investor}-friendly profile.")
        } else if passes >= fails {
            format!("Mixed but somewhat {investor}-compatible.")
        } else {
            format!("Not a classic {investor}-style candidate.")
        };
        Self {
            passes,
            warns,
            fails,
            headline,
        }
    }
}

/// Result of running a profile checklist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileAssessment {
    /// Profile that was run
    pub profile: ProfileKind,
    /// Graded rules in checklist order
    pub rules: Vec<RuleCheck>,
    /// Counts and headline
    pub summary: ProfileSummary,
}

/// Grade a value, or mark the rule `na` with `missing` when undefined.
pub(crate) fn grade(
    name: &'static str,
    condition: &'static str,
    value: Option<f64>,
    percent: bool,
    missing: &'static str,
    grader: impl FnOnce(f64) -> (RuleStatus, &'static str),
) -> RuleCheck {
    let (status, comment) = match value {
        Some(v) => grader(v),
        None => (RuleStatus::Na, missing),
    };
    RuleCheck {
        name,
        condition,
        value,
        percent,
        status,
        comment,
    }
}
