//! Integration Tests
//!
//! End-to-end tests that verify complete workflows across multiple components.

use std::sync::Arc;

use crate::brain::ConcernLevel;
use crate::models::{ChatRequest, ChatStatus, Conversation, ConversationTurn, Role};
use crate::orchestrator::FallbackPool;
use crate::pipeline::ChatPipeline;
use crate::random::SeededRandom;
use crate::suggestions::exercises::{BREATHING_EXERCISES, PHYSICAL_EXERCISES};
use crate::suggestions::resources::{CRISIS_RESOURCES, GENERAL_RESOURCES};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Pipeline with no generation backend and a fixed seed.
fn offline_pipeline(seed: u64) -> ChatPipeline {
    ChatPipeline::new(None, Arc::new(SeededRandom::new(seed)))
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[tokio::test]
    async fn test_anxious_deadline_message() {
        let pipeline = offline_pipeline(42);

        let result = pipeline
            .process("I feel so anxious and overwhelmed about my deadlines", &[])
            .await;

        // Nine tokens dilute anxiety to 1/9 and burnout to 2/9, both below
        // the elevated threshold.
        assert_eq!(result.status, ChatStatus::Success);
        assert_eq!(result.concern_level, ConcernLevel::Low);
        assert!(result.exercise.is_none());
        assert!(result.resources.is_none());
        assert!(FallbackPool::General.replies().contains(&result.message.as_str()));
    }

    #[tokio::test]
    async fn test_dense_anxiety_message() {
        let pipeline = offline_pipeline(42);

        let result = pipeline.process("anxious overwhelmed deadlines", &[]).await;

        // anxiety 1/3, burnout 2/3
        assert_eq!(result.concern_level, ConcernLevel::High);
        let exercise = result.exercise.expect("Expected an exercise");
        assert!(
            BREATHING_EXERCISES.contains(&exercise) || PHYSICAL_EXERCISES.contains(&exercise)
        );
        assert!(FallbackPool::Anxiety.replies().contains(&result.message.as_str()));

        let bundle = result.resources.expect("Expected resources at high concern");
        assert_eq!(bundle.resources[..2], CRISIS_RESOURCES[..]);
        assert_eq!(bundle.resources[2], GENERAL_RESOURCES[0]);
    }

    #[tokio::test]
    async fn test_crisis_message() {
        for seed in 0..10 {
            let pipeline = offline_pipeline(seed);

            let result = pipeline.process("I want to end it all", &[]).await;

            assert_eq!(result.concern_level, ConcernLevel::Critical);
            assert!(result.exercise.is_none());
            assert!(FallbackPool::Critical.replies().contains(&result.message.as_str()));

            let bundle = result.resources.expect("Expected crisis resources");
            assert_eq!(bundle.resources, CRISIS_RESOURCES.to_vec());
        }
    }

    #[tokio::test]
    async fn test_plain_greeting() {
        let pipeline = offline_pipeline(7);

        let result = pipeline.process("hello", &[]).await;

        assert_eq!(result.concern_level, ConcernLevel::Low);
        assert!(result.exercise.is_none());
        assert!(result.resources.is_none());
        assert!(FallbackPool::General.replies().contains(&result.message.as_str()));
    }
}

// ============================================================================
// Conversation Flow Tests
// ============================================================================

#[cfg(test)]
mod conversation_flow_tests {
    use super::*;

    #[tokio::test]
    async fn test_history_is_not_mutated() {
        let pipeline = offline_pipeline(3);
        let history = vec![
            ConversationTurn::new(Role::User, "hi"),
            ConversationTurn::new(Role::Assistant, "Hello!"),
        ];
        let before = history.clone();

        pipeline.process("I feel hopeless", &history).await;

        assert_eq!(history, before);
    }

    #[tokio::test]
    async fn test_caller_owned_conversation() {
        let pipeline = offline_pipeline(5);
        let mut conversation = Conversation::new();

        for raw in ["  hello  ", "I'm exhausted and drained"] {
            let request = ChatRequest::parse(raw).unwrap();
            let result = pipeline.process(&request.message, conversation.turns()).await;
            conversation.push_user(request.message);
            conversation.push_assistant(result.message);
        }

        assert_eq!(conversation.len(), 4);
        assert_eq!(conversation.turns()[0].content, "hello");
        assert_eq!(conversation.turns()[2].role, Role::User);
        assert_eq!(conversation.turns()[3].role, Role::Assistant);

        conversation.reset();
        assert!(conversation.is_empty());
    }

    #[tokio::test]
    async fn test_blank_request_rejected_before_pipeline() {
        assert!(ChatRequest::parse("   ").is_err());
    }

    #[test]
    fn test_greeting_comes_from_greeting_pool() {
        let pipeline = offline_pipeline(11);
        assert!(!pipeline.has_backend());
        assert!(FallbackPool::Greeting.replies().contains(&pipeline.greeting()));
    }
}

// ============================================================================
// Serialization Tests
// ============================================================================

#[cfg(test)]
mod result_shape_tests {
    use super::*;

    #[tokio::test]
    async fn test_result_json_shape() {
        let pipeline = offline_pipeline(1);

        let result = pipeline.process("I want to end it all", &[]).await;
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["concern_level"], "critical");
        assert!(json["exercise"].is_null());
        assert_eq!(
            json["resources"]["message"],
            "These resources can provide immediate support:"
        );
        assert_eq!(json["resources"]["resources"][0]["name"], CRISIS_RESOURCES[0].name);
    }

    #[tokio::test]
    async fn test_exercise_serializes_benefits_key() {
        let pipeline = offline_pipeline(4);

        let result = pipeline.process("so anxious and worried", &[]).await;
        let json = serde_json::to_value(&result).unwrap();

        assert!(json["exercise"]["name"].is_string());
        assert!(json["exercise"]["benefits"].is_string());
    }
}
