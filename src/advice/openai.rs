use serde::{Deserialize, Serialize};

use super::types::AdviceClient;
use super::AdviceError;
use crate::config::AdvisorConfig;

/// HTTP client for an OpenAI-compatible chat completions endpoint.
pub struct OpenAiClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl OpenAiClient {
    /// Build a client from explicit settings.
    pub fn new(config: &AdvisorConfig) -> Result<Self, AdviceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AdviceError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Request body for /chat/completions
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response body from /chat/completions
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Pull the first choice's content out of a chat completions body.
pub fn parse_chat_response(body: &str) -> Result<String, AdviceError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| AdviceError::ResponseParsing(e.to_string()))?;

    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AdviceError::MalformedResponse("response has no choices".into()))?;

    choice
        .message
        .content
        .ok_or_else(|| AdviceError::MalformedResponse("first choice has no content".into()))
}

impl AdviceClient for OpenAiClient {
    fn complete(&self, system: &str, user: &str) -> Result<String, AdviceError> {
        let api_key = self.api_key.as_deref().ok_or(AdviceError::MissingApiKey)?;

        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        tracing::debug!(model = %self.model, url = %url, "Requesting chat completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    AdviceError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    AdviceError::Timeout(self.timeout_secs)
                } else {
                    AdviceError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => AdviceError::Authentication(status.as_u16()),
                429 => AdviceError::RateLimited(body),
                code => AdviceError::ServiceError { status: code, body },
            });
        }

        let text = response
            .text()
            .map_err(|e| AdviceError::ResponseParsing(e.to_string()))?;

        parse_chat_response(&text)
    }
}
