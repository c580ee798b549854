//! Job-load classification with fixed thresholds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Most active jobs a technician can carry and still count as moderately
/// loaded. The thresholds are constants of the design, not deployment
/// configuration.
const MODERATE_ACTIVE_MAX: usize = 2;

/// Advisory load bucket for a technician, derived from their active jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadClassification {
    /// No active jobs; free for new assignments.
    Available,
    /// One or two active jobs.
    Moderate,
    /// More than two active jobs.
    Heavy,
}

impl LoadClassification {
    /// Classifies an active-job count.
    ///
    /// Pure function of the count: `0` is available, one through two is
    /// moderate, anything above is heavy.
    #[must_use]
    pub const fn classify(active_jobs: usize) -> Self {
        match active_jobs {
            0 => Self::Available,
            1..=MODERATE_ACTIVE_MAX => Self::Moderate,
            _ => Self::Heavy,
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
        }
    }
}

impl fmt::Display for LoadClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
