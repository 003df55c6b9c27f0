use bon::bon;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error (status {status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ChatResult<T> = Result<T, ChatError>;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    #[must_use]
    pub fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    #[must_use]
    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
pub struct ChatFullResponse {
    pub choices: Vec<FullChoice>,
}

#[derive(Deserialize)]
pub struct FullChoice {
    pub message: FullMessage,
}

#[derive(Deserialize)]
pub struct FullMessage {
    pub content: Option<String>,
}

/// Client for an OpenAI-compatible chat-completion endpoint. Sends one
/// non-streaming completion request per call.
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

#[bon]
impl ChatClient {
    /// Create a chat client.
    ///
    /// # Panics
    /// if the underlying HTTP client can't be created.
    #[builder(start_fn = with_base_url)]
    #[must_use]
    pub fn new(
        #[builder(start_fn)] base_url: &str,
        api_key: String,
        model: Option<String>,
        max_tokens: Option<u32>,
        temperature: Option<f32>,
    ) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(Duration::from_secs(5))
                .timeout(Duration::from_secs(60))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
            api_key,
            model: model.unwrap_or_default(),
            max_tokens: max_tokens.unwrap_or(100),
            temperature: temperature.unwrap_or(0.7),
        }
    }

    /// Send a single prompt, optionally preceded by a system message, and
    /// return the generated message text.
    #[builder]
    pub async fn chat(
        &self,
        #[builder(start_fn)] prompt: &str,
        system: Option<&str>,
    ) -> ChatResult<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system {
            messages.push(Message::system(system));
        }
        messages.push(Message::user(prompt));
        self.call(messages).await
    }

    pub async fn call(&self, messages: Vec<Message>) -> ChatResult<String> {
        let req_body = ChatRequest {
            model: self.model.clone(),
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };
        let url = format!("{}/v1/chat/completions", self.base_url);
        debug!("chat completion request to {url}");
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&req_body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ChatError::Api {
                status: response.status(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        let full: ChatFullResponse = response.json().await?;
        Ok(full
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_choice_content() {
        let full: ChatFullResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"golden hour"}},{"message":{"content":"x"}}]}"#,
        )
        .expect("decode");
        let content = full
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();
        assert_eq!(content, "golden hour");
    }

    #[test]
    fn empty_choices_fall_back_to_empty_string() {
        let full: ChatFullResponse = serde_json::from_str(r#"{"choices":[]}"#).expect("decode");
        let content = full
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();
        assert!(content.is_empty());
    }
}
