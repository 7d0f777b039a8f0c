//! OpenRouter-backed message generator.
//!
//! Calls the chat completions endpoint with a strict JSON schema response
//! format (`{"message": string}`). Requests time out after 30 seconds;
//! server errors (5xx) are retried exactly once.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::ports::{GeneratorError, MessageGenerator};

const SYSTEM_PROMPT: &str = "You are an empathetic career coach specializing in supporting active job seekers. Your goal is to create short, uplifting daily motivational messages that acknowledge the challenges of job hunting, celebrate small wins, and inspire persistence. The recipient is someone using a job tracking app to manage their applications, so reference themes like tracking progress, handling rejections, networking, or skill-building without being overly generic.\n\nKey guidelines:\n\n- Keep the message to 20-40 words (one short paragraph).\n\n- Use a warm, encouraging tone: positive but realistic, avoiding toxic positivity and empty platitudes.\n\n- Make it personal and relatable, as if speaking directly to the user (e.g., \"You're making real progress by...\").\n\n- Ensure it's inclusive, professional, and suitable for all ages/genders.\n\nGenerate one unique message now. Do not add any extra text, explanations, or metadata. The message MUST be in Polish.";

/// Configuration for the OpenRouter generator.
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion token budget.
    pub max_tokens: u32,
}

impl OpenRouterConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "tngtech/deepseek-r1t2-chimera:free".to_string(),
            base_url: "https://openrouter.ai/api/v1".to_string(),
            timeout: Duration::from_secs(30),
            temperature: 0.8,
            max_tokens: 300,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenRouter implementation of the `MessageGenerator` port.
pub struct OpenRouterGenerator {
    config: OpenRouterConfig,
    client: Client,
}

impl OpenRouterGenerator {
    /// Creates a new generator with the given configuration.
    pub fn new(config: OpenRouterConfig) -> Result<Self, GeneratorError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GeneratorError::unavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    fn build_request(&self) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            response_format: ResponseFormat {
                format_type: "json_schema".to_string(),
                json_schema: JsonSchemaSpec {
                    name: "motivational_message".to_string(),
                    strict: true,
                    schema: serde_json::json!({
                        "type": "object",
                        "properties": {
                            "message": { "type": "string" }
                        },
                        "required": ["message"],
                        "additionalProperties": false
                    }),
                },
            },
        }
    }

    async fn send_request(&self, request: &ChatRequest) -> Result<Response, GeneratorError> {
        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else {
                    GeneratorError::unavailable(e.to_string())
                }
            })
    }

    /// Sends the request, retrying exactly once on a server error.
    async fn send_with_retry(&self, request: &ChatRequest) -> Result<Response, GeneratorError> {
        let response = self.send_request(request).await?;
        let status = response.status();

        if status.is_server_error() {
            tracing::warn!(status = %status, "OpenRouter server error, retrying once");
            return self.send_request(request).await;
        }

        Ok(response)
    }

    async fn handle_response(&self, response: Response) -> Result<String, GeneratorError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => GeneratorError::AuthenticationFailed,
                429 => GeneratorError::RateLimited,
                _ => GeneratorError::unavailable(format!("HTTP {}: {}", status, body)),
            });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::parse(format!("Invalid chat response: {}", e)))?;

        let content = chat
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| GeneratorError::parse("Chat response has no choices"))?;

        // The model answers with the schema'd JSON document as the message
        // content; anything else is a schema violation.
        let payload: MessagePayload = serde_json::from_str(content)
            .map_err(|e| GeneratorError::parse(format!("Response did not match schema: {}", e)))?;

        if payload.message.trim().is_empty() {
            return Err(GeneratorError::parse("Generated message is empty"));
        }

        Ok(payload.message)
    }
}

#[async_trait]
impl MessageGenerator for OpenRouterGenerator {
    async fn generate(&self) -> Result<String, GeneratorError> {
        let request = self.build_request();
        let response = self.send_with_retry(&request).await?;
        self.handle_response(response).await
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
    json_schema: JsonSchemaSpec,
}

#[derive(Debug, Serialize)]
struct JsonSchemaSpec {
    name: String,
    strict: bool,
    schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// The document the strict schema constrains the model to.
#[derive(Debug, Deserialize)]
struct MessagePayload {
    message: String,
}
