//! Lexical signal detection.
//!
//! Scores a message against the four keyword catalogs. Matching is exact on
//! lower-cased whitespace tokens; there is no stemming.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::keywords::{
    ANXIETY_KEYWORDS, BURNOUT_KEYWORDS, CRISIS_PHRASES, DEPRESSION_KEYWORDS, SUICIDAL_KEYWORDS,
};

/// Signal category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Anxiety,
    Depression,
    Burnout,
    Suicidal,
}

impl Category {
    /// Categories that drive exercise choice and the directive, in tie-break
    /// priority order.
    pub const ISSUES: [Category; 3] = [Category::Anxiety, Category::Depression, Category::Burnout];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Anxiety => "anxiety",
            Category::Depression => "depression",
            Category::Burnout => "burnout",
            Category::Suicidal => "suicidal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-message signal scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalScores {
    pub anxiety: f64,
    pub depression: f64,
    pub burnout: f64,
    pub suicidal: f64,
    /// Set when a crisis phrase was found anywhere in the message.
    pub immediate_help: bool,
}

impl SignalScores {
    pub fn score(&self, category: Category) -> f64 {
        match category {
            Category::Anxiety => self.anxiety,
            Category::Depression => self.depression,
            Category::Burnout => self.burnout,
            Category::Suicidal => self.suicidal,
        }
    }

    /// Highest score over all four categories.
    pub fn max_score(&self) -> f64 {
        self.anxiety
            .max(self.depression)
            .max(self.burnout)
            .max(self.suicidal)
    }

    /// The highest-scoring of anxiety, depression and burnout.
    ///
    /// Only a strictly higher score replaces the current pick, so ties go to
    /// the category declared first in [`Category::ISSUES`].
    pub fn prominent_issue(&self) -> (Category, f64) {
        let mut best = (Category::Anxiety, self.anxiety);
        for category in &Category::ISSUES[1..] {
            let score = self.score(*category);
            if score > best.1 {
                best = (*category, score);
            }
        }
        best
    }

    /// Like [`prominent_issue`](Self::prominent_issue) but only returns the
    /// category when its score exceeds `threshold`.
    pub fn prominent_issue_above(&self, threshold: f64) -> Option<Category> {
        let (category, score) = self.prominent_issue();
        (score > threshold).then_some(category)
    }
}

/// Keyword-based signal detector
pub struct SignalDetector {
    anxiety: HashSet<&'static str>,
    depression: HashSet<&'static str>,
    burnout: HashSet<&'static str>,
    suicidal: HashSet<&'static str>,
}

impl Default for SignalDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalDetector {
    /// Create a detector over the built-in catalogs
    pub fn new() -> Self {
        Self {
            anxiety: ANXIETY_KEYWORDS.iter().copied().collect(),
            depression: DEPRESSION_KEYWORDS.iter().copied().collect(),
            burnout: BURNOUT_KEYWORDS.iter().copied().collect(),
            suicidal: SUICIDAL_KEYWORDS.iter().copied().collect(),
        }
    }

    /// First crisis phrase contained in an already lower-cased message.
    fn find_crisis_phrase(&self, lowered: &str) -> Option<&'static str> {
        CRISIS_PHRASES
            .iter()
            .copied()
            .find(|phrase| lowered.contains(phrase))
    }

    /// Score a message. Never fails; empty or whitespace-only input yields
    /// all-zero scores.
    pub fn detect(&self, message: &str) -> SignalScores {
        let mut scores = SignalScores::default();
        if message.trim().is_empty() {
            return scores;
        }

        let lowered = message.to_lowercase();

        if self.find_crisis_phrase(&lowered).is_some() {
            scores.immediate_help = true;
            scores.suicidal = 1.0;
        }

        // Every whitespace token counts toward the denominator.
        let tokens: Vec<&str> = lowered.split_whitespace().collect();
        if tokens.is_empty() {
            return scores;
        }

        let total = tokens.len() as f64;
        let ratio = |set: &HashSet<&'static str>| {
            let matches = tokens.iter().filter(|token| set.contains(*token)).count();
            matches as f64 / total
        };

        scores.anxiety = ratio(&self.anxiety).min(1.0);
        scores.depression = ratio(&self.depression).min(1.0);
        scores.burnout = ratio(&self.burnout).min(1.0);
        scores.suicidal = (scores.suicidal + ratio(&self.suicidal)).min(1.0);

        scores
    }
}
