//! Brain Module Tests
//!
//! Signal detection, concern classification and the analyzer.

use crate::brain::keywords::CRISIS_PHRASES;
use crate::brain::{classify, BrainAnalyzer, ConcernLevel, SignalDetector, SignalScores};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[cfg(test)]
mod signal_detector_tests {
    use super::*;

    #[test]
    fn test_blank_input_scores_zero() {
        let detector = SignalDetector::new();

        for input in ["", " ", "\t\t", "\n  \r\n"] {
            let scores = detector.detect(input);
            assert_eq!(scores.anxiety, 0.0);
            assert_eq!(scores.depression, 0.0);
            assert_eq!(scores.burnout, 0.0);
            assert_eq!(scores.suicidal, 0.0);
            assert!(!scores.immediate_help, "Expected no help flag for {:?}", input);
        }
    }

    #[test]
    fn test_every_crisis_phrase_triggers_immediate_help() {
        let detector = SignalDetector::new();

        for phrase in CRISIS_PHRASES {
            let message = format!("Lately I feel like I {} and nobody notices", phrase);
            let scores = detector.detect(&message);
            assert!(scores.immediate_help, "Expected immediate help for '{}'", phrase);
            assert_eq!(scores.suicidal, 1.0, "Expected max suicidal for '{}'", phrase);
            assert_eq!(classify(&scores), ConcernLevel::Critical);
        }
    }

    #[test]
    fn test_crisis_phrase_is_case_insensitive_substring() {
        let detector = SignalDetector::new();

        let scores = detector.detect("Sometimes I think everyone is BETTER OFF DEAD without me.");
        assert!(scores.immediate_help);
    }

    #[test]
    fn test_detection_is_idempotent() {
        let detector = SignalDetector::new();
        let message = "Work pressure keeps me stressed and tired every night";

        let first = detector.detect(message);
        let second = detector.detect(message);
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_token_dilutes_scores() {
        let detector = SignalDetector::new();

        // Nine tokens: "anxious" for anxiety, "overwhelmed" and "deadlines"
        // for burnout.
        let scores = detector.detect("I feel so anxious and overwhelmed about my deadlines");
        assert!(approx(scores.anxiety, 1.0 / 9.0));
        assert!(approx(scores.burnout, 2.0 / 9.0));
        assert_eq!(scores.depression, 0.0);
        assert_eq!(scores.suicidal, 0.0);
    }

    #[test]
    fn test_function_words_count_toward_total() {
        let detector = SignalDetector::new();

        let scores = detector.detect("I am so sad");
        assert!(approx(scores.depression, 0.25));
        assert_eq!(classify(&scores), ConcernLevel::Low);
    }

    #[test]
    fn test_crisis_phrase_matches_as_plain_substring() {
        let detector = SignalDetector::new();

        // Substring matching accepts this false positive so that any
        // phrasing containing "end it all" is caught.
        let scores = detector.detect("I want to spend it all on a holiday");
        assert!(scores.immediate_help);
        assert_eq!(classify(&scores), ConcernLevel::Critical);
    }

    #[test]
    fn test_uppercase_keywords_match() {
        let detector = SignalDetector::new();

        let scores = detector.detect("ANXIOUS");
        assert_eq!(scores.anxiety, 1.0);
    }

    #[test]
    fn test_suicidal_word_without_phrase() {
        let detector = SignalDetector::new();

        let scores = detector.detect("suicidal thoughts lately");
        assert!(!scores.immediate_help);
        assert!(approx(scores.suicidal, 1.0 / 3.0));
    }

    #[test]
    fn test_scores_stay_in_unit_interval() {
        let detector = SignalDetector::new();

        let scores = detector.detect("tired tired exhausted drained want to die suicide");
        for value in [scores.anxiety, scores.depression, scores.burnout, scores.suicidal] {
            assert!((0.0..=1.0).contains(&value));
        }
        assert_eq!(scores.suicidal, 1.0);
    }
}

#[cfg(test)]
mod concern_classifier_tests {
    use super::*;

    #[test]
    fn test_suicidal_escalation_beats_max_rule() {
        let scores = SignalScores {
            anxiety: 0.9,
            suicidal: 0.4,
            ..Default::default()
        };
        assert_eq!(classify(&scores), ConcernLevel::Critical);
    }

    #[test]
    fn test_high_and_moderate() {
        let high = SignalScores {
            depression: 0.7,
            ..Default::default()
        };
        assert_eq!(classify(&high), ConcernLevel::High);

        let moderate = SignalScores {
            burnout: 0.5,
            suicidal: 0.2,
            ..Default::default()
        };
        assert_eq!(classify(&moderate), ConcernLevel::Moderate);
    }

    #[test]
    fn test_low_suicidal_still_counts_toward_max() {
        // 0.3 is not above the escalation threshold, and not above the
        // moderate threshold either.
        let scores = SignalScores {
            suicidal: 0.3,
            ..Default::default()
        };
        assert_eq!(classify(&scores), ConcernLevel::Low);
    }
}

#[cfg(test)]
mod analyzer_tests {
    use super::*;

    #[test]
    fn test_scenarios() {
        let brain = BrainAnalyzer::new();

        let anxious = brain.analyze("I feel so anxious and overwhelmed about my deadlines");
        assert!(anxious.scores.anxiety > 0.0);
        assert!(anxious.scores.burnout > 0.0);
        assert_eq!(anxious.concern_level, ConcernLevel::Low);

        let crisis = brain.analyze("I want to end it all");
        assert!(crisis.scores.immediate_help);
        assert_eq!(crisis.concern_level, ConcernLevel::Critical);

        let hello = brain.analyze("hello");
        assert_eq!(hello.scores, SignalScores::default());
        assert_eq!(hello.concern_level, ConcernLevel::Low);
    }

    #[test]
    fn test_no_state_between_messages() {
        let brain = BrainAnalyzer::new();

        brain.analyze("I want to die");
        let after = brain.analyze("hello");
        assert!(!after.scores.immediate_help);
        assert_eq!(after.concern_level, ConcernLevel::Low);
    }
}
