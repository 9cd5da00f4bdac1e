use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::brain::ConcernLevel;
use crate::error::AppError;
use crate::suggestions::{Exercise, ResourceBundle};

/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message within a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Who wrote the message.
    pub role: Role,
    /// The text content of the message.
    pub content: String,
    /// When the message was recorded.
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Caller-owned history for one session.
///
/// The pipeline only ever borrows the turns; appending the user message and
/// the reply is up to whoever holds the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// The unique identifier for the session (UUID).
    pub id: String,
    turns: Vec<ConversationTurn>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            turns: Vec::new(),
        }
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(ConversationTurn::new(Role::User, content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(ConversationTurn::new(Role::Assistant, content));
    }

    /// Drop all turns, keeping the session id.
    pub fn reset(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Inbound chat request as accepted at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    /// The user's message. Must contain something other than whitespace.
    #[validate(custom(function = "not_blank"))]
    pub message: String,
}

impl ChatRequest {
    /// Build a request from raw input, rejecting blank messages. The stored
    /// message is trimmed.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let request = Self {
            message: raw.trim().to_string(),
        };
        request.validate()?;
        Ok(request)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatStatus {
    Success,
}

/// Everything the pipeline returns for one message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResult {
    pub status: ChatStatus,
    /// Reply shown to the user, generated or canned.
    pub message: String,
    pub exercise: Option<Exercise>,
    /// Withheld (`None`) when the concern level is low.
    pub resources: Option<ResourceBundle>,
    pub concern_level: ConcernLevel,
}
