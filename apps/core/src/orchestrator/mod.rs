//! Response orchestration: directive construction, generation and the
//! fallback chain.

pub mod fallback;
pub mod prompt;
pub mod responder;

pub use fallback::{fallback_reply, select_pool, FallbackPool};
pub use prompt::{build_directive, situational_clause, BEHAVIOR_PREAMBLE};
pub use responder::ResponseOrchestrator;
