//! Brain Analyzer - runs signal detection and classification for one message.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::concern::{classify, ConcernLevel};
use super::signals::{SignalDetector, SignalScores};

/// Analysis of a single message. Produced fresh per call; nothing carries
/// over between messages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub scores: SignalScores,
    pub concern_level: ConcernLevel,
}

/// Main Brain analyzer
#[derive(Default)]
pub struct BrainAnalyzer {
    detector: SignalDetector,
}

impl BrainAnalyzer {
    pub fn new() -> Self {
        Self {
            detector: SignalDetector::new(),
        }
    }

    /// Analyze a message and produce an assessment
    pub fn analyze(&self, message: &str) -> Assessment {
        let scores = self.detector.detect(message);
        let concern_level = classify(&scores);

        debug!(
            anxiety = scores.anxiety,
            depression = scores.depression,
            burnout = scores.burnout,
            suicidal = scores.suicidal,
            immediate_help = scores.immediate_help,
            %concern_level,
            "Message analyzed"
        );

        Assessment {
            scores,
            concern_level,
        }
    }
}
