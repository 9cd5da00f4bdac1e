//! Mind Companion core.
//!
//! Lexical detection of anxiety, depression, burnout and suicidal signals,
//! concern classification, exercise and resource suggestions, and a reply
//! produced by a generation backend with a canned fallback chain.
//!
//! Callers own the conversation history and pass it in by reference; the
//! core keeps no per-session state.

pub mod backend;
pub mod brain;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod orchestrator;
pub mod pipeline;
pub mod random;
pub mod suggestions;

#[cfg(test)]
mod tests;

pub use brain::{Assessment, BrainAnalyzer, Category, ConcernLevel, SignalScores};
pub use config::AppConfig;
pub use error::{AppError, BackendError};
pub use models::{ChatRequest, ChatResult, ChatStatus, Conversation, ConversationTurn, Role};
pub use pipeline::ChatPipeline;
