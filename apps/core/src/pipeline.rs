//! Chat pipeline - the single entry point for callers.
//!
//! Flow per message:
//! 1. Brain analysis (signal scores + concern level)
//! 2. Exercise and resource suggestions
//! 3. Reply text from the orchestrator (generated or fallback)

use std::sync::Arc;
use tracing::{info, instrument};

use crate::backend::{init_backend, GenerationBackend};
use crate::brain::{Assessment, BrainAnalyzer};
use crate::config::AppConfig;
use crate::models::{ChatResult, ChatStatus, ConversationTurn};
use crate::orchestrator::{FallbackPool, ResponseOrchestrator};
use crate::random::{RandomSource, ThreadRandom};
use crate::suggestions::{select_exercise, select_resources};

pub struct ChatPipeline {
    brain: BrainAnalyzer,
    orchestrator: ResponseOrchestrator,
    rng: Arc<dyn RandomSource>,
}

impl ChatPipeline {
    /// Creates a pipeline.
    ///
    /// # Arguments
    ///
    /// * `backend` - The generation backend, or `None` to always use fallback replies.
    /// * `rng` - Random source shared by exercise and fallback selection.
    pub fn new(backend: Option<Arc<dyn GenerationBackend>>, rng: Arc<dyn RandomSource>) -> Self {
        Self {
            brain: BrainAnalyzer::new(),
            orchestrator: ResponseOrchestrator::new(backend, rng.clone()),
            rng,
        }
    }

    /// Production pipeline: backend from `config`, thread-local randomness.
    pub fn from_config(config: &AppConfig) -> Self {
        let rng: Arc<dyn RandomSource> = Arc::new(ThreadRandom);
        let mut orchestrator = ResponseOrchestrator::new(init_backend(config), rng.clone())
            .with_history_window(config.history_window);
        if let Some(generation) = &config.generation {
            orchestrator = orchestrator.with_timeout(generation.timeout());
        }
        Self {
            brain: BrainAnalyzer::new(),
            orchestrator,
            rng,
        }
    }

    /// Replaces the orchestrator, e.g. to change its timeout or history window.
    pub fn with_orchestrator(mut self, orchestrator: ResponseOrchestrator) -> Self {
        self.orchestrator = orchestrator;
        self
    }

    /// Whether replies can be generated, or will always come from the
    /// fallback pools.
    pub fn has_backend(&self) -> bool {
        self.orchestrator.has_backend()
    }

    /// Opening line for a new or reset conversation.
    pub fn greeting(&self) -> &'static str {
        FallbackPool::Greeting.pick(self.rng.as_ref())
    }

    /// Runs the whole pipeline for one message.
    ///
    /// `history` holds earlier turns, oldest first, and is never modified;
    /// appending `message` and the reply is the caller's job. Never fails.
    #[instrument(skip_all, fields(chars = message.len(), history = history.len()))]
    pub async fn process(&self, message: &str, history: &[ConversationTurn]) -> ChatResult {
        let Assessment {
            scores,
            concern_level,
        } = self.brain.analyze(message);

        let exercise = select_exercise(&scores, self.rng.as_ref());
        let bundle = select_resources(concern_level);
        let resources = concern_level.discloses_resources().then_some(bundle);

        let reply = self.orchestrator.respond(message, &scores, history).await;

        info!(
            %concern_level,
            immediate_help = scores.immediate_help,
            exercise = exercise.map(|e| e.name).unwrap_or("none"),
            resources = resources.is_some(),
            "Message processed"
        );

        ChatResult {
            status: ChatStatus::Success,
            message: reply,
            exercise,
            resources,
            concern_level,
        }
    }
}
