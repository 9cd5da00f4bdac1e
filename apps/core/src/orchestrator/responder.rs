use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

use super::fallback::{fallback_reply, select_pool};
use super::prompt::build_directive;
use crate::backend::GenerationBackend;
use crate::brain::SignalScores;
use crate::error::BackendError;
use crate::models::ConversationTurn;
use crate::random::RandomSource;

// --- Constants ---
const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_HISTORY_WINDOW: usize = 10;

/// Produces the reply text for one message.
///
/// Tries the generation backend once and falls back to a canned reply on any
/// failure, including a missing backend. Never returns an error.
pub struct ResponseOrchestrator {
    backend: Option<Arc<dyn GenerationBackend>>,
    rng: Arc<dyn RandomSource>,
    generation_timeout: Duration,
    history_window: usize,
}

impl ResponseOrchestrator {
    /// Creates an orchestrator.
    ///
    /// # Arguments
    ///
    /// * `backend` - The generation backend, or `None` when no credential is configured.
    /// * `rng` - Random source used to pick fallback replies.
    pub fn new(backend: Option<Arc<dyn GenerationBackend>>, rng: Arc<dyn RandomSource>) -> Self {
        Self {
            backend,
            rng,
            generation_timeout: DEFAULT_GENERATION_TIMEOUT,
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }

    pub fn with_timeout(mut self, generation_timeout: Duration) -> Self {
        self.generation_timeout = generation_timeout;
        self
    }

    pub fn with_history_window(mut self, history_window: usize) -> Self {
        self.history_window = history_window;
        self
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Most recent `history_window` turns, oldest first.
    fn recent_history<'a>(&self, history: &'a [ConversationTurn]) -> &'a [ConversationTurn] {
        let start = history.len().saturating_sub(self.history_window);
        &history[start..]
    }

    /// One bounded generation attempt. No retries.
    async fn try_generate(
        &self,
        message: &str,
        scores: &SignalScores,
        history: &[ConversationTurn],
    ) -> Result<String, BackendError> {
        let backend = self.backend.as_ref().ok_or(BackendError::NoCredential)?;
        let directive = build_directive(scores);

        let text = timeout(
            self.generation_timeout,
            backend.generate(&directive, message, self.recent_history(history)),
        )
        .await
        .map_err(|_| BackendError::Timeout(self.generation_timeout))??;

        if text.trim().is_empty() {
            return Err(BackendError::EmptyContent);
        }
        Ok(text)
    }

    /// Reply for `message`. Always returns non-empty text.
    ///
    /// # Arguments
    ///
    /// * `message` - The latest user message.
    /// * `scores` - Signal scores computed for `message`.
    /// * `history` - Earlier turns of the conversation, oldest first, not including `message`.
    #[instrument(skip_all, fields(history = history.len()))]
    pub async fn respond(
        &self,
        message: &str,
        scores: &SignalScores,
        history: &[ConversationTurn],
    ) -> String {
        match self.try_generate(message, scores, history).await {
            Ok(text) => {
                debug!(chars = text.len(), "Using generated reply");
                text
            }
            Err(BackendError::NoCredential) => {
                let pool = select_pool(scores);
                info!(%pool, "No generation backend, using fallback reply");
                fallback_reply(scores, self.rng.as_ref()).to_string()
            }
            Err(e) => {
                let pool = select_pool(scores);
                warn!(%pool, "Generation failed, using fallback reply: {}", e);
                fallback_reply(scores, self.rng.as_ref()).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::orchestrator::FallbackPool;
    use crate::random::SeededRandom;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // --- Mock Backend ---

    struct MockBackend {
        response: Result<String, BackendError>,
        seen_history: Mutex<Option<usize>>,
    }

    impl MockBackend {
        fn new(response: Result<String, BackendError>) -> Arc<Self> {
            Arc::new(Self {
                response,
                seen_history: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl GenerationBackend for MockBackend {
        async fn generate(
            &self,
            _directive: &str,
            _user_message: &str,
            history: &[ConversationTurn],
        ) -> Result<String, BackendError> {
            *self.seen_history.lock().unwrap() = Some(history.len());
            self.response.clone()
        }
    }

    fn orchestrator(backend: Option<Arc<dyn GenerationBackend>>) -> ResponseOrchestrator {
        ResponseOrchestrator::new(backend, Arc::new(SeededRandom::new(7)))
    }

    #[tokio::test]
    async fn test_backend_text_returned_verbatim() {
        let backend = MockBackend::new(Ok("  Generated reply\n".to_string()));
        let orchestrator = orchestrator(Some(backend));

        let reply = orchestrator.respond("hello", &SignalScores::default(), &[]).await;
        assert_eq!(reply, "  Generated reply\n");
    }

    #[tokio::test]
    async fn test_blank_backend_text_falls_back() {
        let backend = MockBackend::new(Ok("   ".to_string()));
        let orchestrator = orchestrator(Some(backend));

        let reply = orchestrator.respond("hello", &SignalScores::default(), &[]).await;
        assert!(FallbackPool::General.replies().contains(&reply.as_str()));
    }

    #[tokio::test]
    async fn test_history_is_windowed() {
        let backend = MockBackend::new(Ok("ok".to_string()));
        let orchestrator =
            orchestrator(Some(backend.clone() as Arc<dyn GenerationBackend>)).with_history_window(2);

        let history: Vec<ConversationTurn> = (0..5)
            .map(|i| ConversationTurn::new(Role::User, format!("turn {}", i)))
            .collect();
        orchestrator.respond("hello", &SignalScores::default(), &history).await;

        assert_eq!(*backend.seen_history.lock().unwrap(), Some(2));
    }
}
