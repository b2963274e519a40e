//! Chatbot bridge to an external OpenAI-compatible LLM service

use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    config::LlmConfig,
    error::{AppError, AppResult},
    models::chat::{ChatRequest, ChatResponse},
    repository::Repository,
};

/// Fixed assistant role sent with every request; no prior-turn context is
/// assembled, each call is stateless from the model's perspective.
const SYSTEM_PROMPT: &str = "You are a helpful AI assistant for GearGuard, a maintenance tracking system.
You can help users with:
1. Answering FAQs about maintenance management
2. Providing smart suggestions for preventive maintenance schedules
3. Understanding maintenance requests in natural language
4. General guidance on using the application

Be helpful, concise, and professional.";

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}

#[derive(Clone)]
pub struct ChatService {
    repository: Repository,
    config: LlmConfig,
    http: reqwest::Client,
}

impl ChatService {
    pub fn new(repository: Repository, config: LlmConfig) -> Self {
        Self {
            repository,
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Forward a user message to the chat completion service, log the
    /// exchange, and return the reply verbatim. No retry, no fallback.
    pub async fn send(&self, request: &ChatRequest) -> AppResult<ChatResponse> {
        if self.config.api_key.is_empty() {
            return Err(AppError::Upstream("LLM API key is not configured".to_string()));
        }

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let payload = completion_payload(&self.config.model, &request.message);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "chat service returned {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        let reply = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AppError::Upstream("chat service returned no choices".to_string()))?;

        self.repository
            .chat
            .append(&request.session_id, &request.message, &reply)
            .await?;

        Ok(ChatResponse {
            response: reply,
            session_id: request.session_id.clone(),
        })
    }
}

/// Build the chat completion request body: system prompt plus the single
/// user message
fn completion_payload(model: &str, message: &str) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": message },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_system_prompt_and_message() {
        let payload = completion_payload("gpt-4o", "When is the next service due?");
        assert_eq!(payload["model"], "gpt-4o");
        assert_eq!(payload["messages"][0]["role"], "system");
        assert_eq!(payload["messages"][0]["content"], SYSTEM_PROMPT);
        assert_eq!(payload["messages"][1]["role"], "user");
        assert_eq!(payload["messages"][1]["content"], "When is the next service due?");
    }

    #[test]
    fn completion_response_parses() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "Check the schedule." } }
            ]
        }"#;
        let completion: ChatCompletion = serde_json::from_str(body).unwrap();
        assert_eq!(completion.choices[0].message.content, "Check the schedule.");
    }
}
