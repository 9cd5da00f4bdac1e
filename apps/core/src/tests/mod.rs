//! Test Module
//!
//! Cross-module test suite for the Mind Companion core.
//!
//! ## Test Categories
//! - `brain_tests`: signal detection and concern classification
//! - `suggestion_tests`: exercise and resource selection
//! - `orchestrator_tests`: directive, generation and fallback chain
//! - `chaos_test`: concurrent use, slow and failing backends
//! - `integration_tests`: full pipeline scenarios

pub mod brain_tests;
pub mod integration_tests;
