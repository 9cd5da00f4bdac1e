//! Concern level classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::signals::SignalScores;

/// Score above which a category counts as elevated.
pub const ELEVATED_THRESHOLD: f64 = 0.3;

/// Score above which the strongest category makes the concern high.
pub const HIGH_THRESHOLD: f64 = 0.6;

/// Overall severity of a message, ordered `Low < Moderate < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcernLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl ConcernLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ConcernLevel::Low => "low",
            ConcernLevel::Moderate => "moderate",
            ConcernLevel::High => "high",
            ConcernLevel::Critical => "critical",
        }
    }

    /// Whether resources are shown to the user at this level.
    pub fn discloses_resources(&self) -> bool {
        *self >= ConcernLevel::Moderate
    }
}

impl fmt::Display for ConcernLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Map scores to a concern level. First matching rule wins:
///
/// 1. crisis phrase present
/// 2. suicidal score above [`ELEVATED_THRESHOLD`], whatever the other scores
/// 3. max score above [`HIGH_THRESHOLD`]
/// 4. max score above [`ELEVATED_THRESHOLD`]
pub fn classify(scores: &SignalScores) -> ConcernLevel {
    if scores.immediate_help || scores.suicidal > ELEVATED_THRESHOLD {
        return ConcernLevel::Critical;
    }

    let max_score = scores.max_score();
    if max_score > HIGH_THRESHOLD {
        ConcernLevel::High
    } else if max_score > ELEVATED_THRESHOLD {
        ConcernLevel::Moderate
    } else {
        ConcernLevel::Low
    }
}
