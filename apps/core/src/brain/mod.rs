//! # Brain Module
//!
//! Fast, non-LLM analysis of user messages.
//! Runs BEFORE any generation call and decides how worried to be.
//!
//! ## Components
//! - `keywords`: keyword and crisis-phrase catalogs
//! - `signals`: per-category lexical scoring
//! - `concern`: concern level classification
//! - `analyzer`: main entry point producing an `Assessment`

pub mod analyzer;
pub mod concern;
pub mod keywords;
pub mod signals;

pub use analyzer::{Assessment, BrainAnalyzer};
pub use concern::{classify, ConcernLevel, ELEVATED_THRESHOLD, HIGH_THRESHOLD};
pub use signals::{Category, SignalDetector, SignalScores};
