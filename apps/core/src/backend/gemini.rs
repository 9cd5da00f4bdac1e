use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::GenerationBackend;
use crate::config::GenerationConfig;
use crate::error::BackendError;
use crate::models::{ConversationTurn, Role};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google Generative Language (`generateContent`) backend.
pub struct GeminiBackend {
    client: Client,
    config: GenerationConfig,
}

// --- Response types ---
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

impl GeminiBackend {
    pub fn new(config: GenerationConfig) -> Result<Self, BackendError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base, self.config.model
        )
    }

    fn build_payload(
        &self,
        directive: &str,
        user_message: &str,
        history: &[ConversationTurn],
    ) -> serde_json::Value {
        let mut contents: Vec<serde_json::Value> = history
            .iter()
            .map(|turn| {
                let role = match turn.role {
                    Role::User => "user",
                    Role::Assistant => "model",
                };
                serde_json::json!({ "role": role, "parts": [{ "text": turn.content }] })
            })
            .collect();
        contents.push(serde_json::json!({ "role": "user", "parts": [{ "text": user_message }] }));

        serde_json::json!({
            "systemInstruction": { "parts": [{ "text": directive }] },
            "contents": contents,
            "generationConfig": {
                "temperature": self.config.temperature,
                "maxOutputTokens": self.config.max_output_tokens,
            }
        })
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    #[instrument(skip_all, fields(model = %self.config.model, history = history.len()))]
    async fn generate(
        &self,
        directive: &str,
        user_message: &str,
        history: &[ConversationTurn],
    ) -> Result<String, BackendError> {
        let payload = self.build_payload(directive, user_message, history);

        let res = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = res.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| BackendError::Malformed(e.to_string()))?;
        let text = parsed.into_text().ok_or(BackendError::EmptyContent)?;

        debug!(chars = text.len(), "Generation succeeded");
        Ok(text)
    }
}
