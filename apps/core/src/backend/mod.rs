//! Generation backends.
//!
//! The orchestrator depends only on [`GenerationBackend`]. Concrete backends
//! are built once at start-up by [`init_backend`].

pub mod gemini;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::BackendError;
use crate::models::ConversationTurn;

pub use gemini::GeminiBackend;

/// Defines the public interface for a text generation backend.
///
/// Implementations must not retry internally and must collapse every failure
/// (transport, auth, quota, empty content) into a [`BackendError`].
#[async_trait]
pub trait GenerationBackend: Send + Sync + 'static {
    /// Generates a reply for `user_message` following `directive`.
    ///
    /// `history` holds earlier turns of the same conversation, oldest first,
    /// and does not include `user_message`. Backends may ignore it.
    async fn generate(
        &self,
        directive: &str,
        user_message: &str,
        history: &[ConversationTurn],
    ) -> Result<String, BackendError>;
}

/// Build the configured backend, or `None` when no credential is set.
pub fn init_backend(config: &AppConfig) -> Option<Arc<dyn GenerationBackend>> {
    match &config.generation {
        Some(generation) => match GeminiBackend::new(generation.clone()) {
            Ok(backend) => {
                info!(model = %generation.model, "Generation backend configured");
                Some(Arc::new(backend))
            }
            Err(e) => {
                warn!("Failed to build generation backend, using fallback replies: {}", e);
                None
            }
        },
        None => {
            warn!("No generation credential configured - using fallback replies");
            None
        }
    }
}
