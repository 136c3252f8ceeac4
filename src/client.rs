//! Text generation client
//!
//! Blocking HTTP client for an OpenAI-compatible chat-completion endpoint.
//! The pipeline is strictly linear, so every call blocks until the
//! completion arrives; each remote call is attempted exactly once with no
//! retry wrapper — a failure propagates and terminates the run.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::BookConfig;
use crate::error::{Error, Result};
use crate::prompts;

/// One role-tagged message in a completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

/// Client for the upstream text-generation collaborator.
pub struct TextGenClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl TextGenClient {
    /// Create a client from the run configuration.
    pub fn new(config: &BookConfig) -> Result<Self> {
        let client = Client::builder()
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .tcp_keepalive(Duration::from_secs(60))
            .tcp_nodelay(true)
            .connect_timeout(Duration::from_secs(10))
            // Completions for long chapters can take a while.
            .timeout(Duration::from_secs(300))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    /// Send a role-tagged prompt list and return the first completion.
    pub fn complete(&self, messages: &[ChatMessage], temperature: f32) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(%url, model = %self.model, "requesting completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&ChatRequest { model: &self.model, messages, temperature })
            .send()?
            .error_for_status()?;

        let parsed: ChatResponse = response.json()?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(Error::EmptyCompletion)?;

        Ok(content.trim().to_string())
    }

    /// Generate text for one user prompt under the fixed book-writer role.
    pub fn generate(&self, prompt: &str) -> Result<String> {
        let messages = [
            ChatMessage::system(prompts::SYSTEM_ROLE),
            ChatMessage::user(prompt),
        ];
        self.complete(&messages, self.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_message_constructors_tag_roles() {
        let system = ChatMessage::system("be helpful");
        assert_eq!(system.role, "system");
        assert_eq!(system.content, "be helpful");

        let user = ChatMessage::user("write a book");
        assert_eq!(user.role, "user");
    }

    #[test]
    fn chat_request_serializes_expected_shape() {
        let messages = [ChatMessage::system("s"), ChatMessage::user("u")];
        let request = ChatRequest { model: "gpt-4o-mini", messages: &messages, temperature: 0.7 };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "u");
        assert!((value["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn chat_response_parses_first_choice() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"  hello  "}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        let content = parsed.choices.into_iter().next().unwrap().message.content.unwrap();
        assert_eq!(content.trim(), "hello");
    }

    #[test]
    fn chat_response_tolerates_missing_content() {
        let raw = r#"{"choices":[{"message":{"role":"assistant"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.choices[0].message.content.is_none());
    }
}
