//! OpenAI 兼容接口客户端

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};

use crate::config::config::LlmConfig;
use crate::llm::response::CompletionResponse;
use crate::llm::{GenerationError, TextGenerator};
use crate::prompt::SYSTEM_PROMPT;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

/// 调用 `{base_url}/chat/completions` 的生成客户端
pub struct OpenAiCompatibleClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model_name: String,
    temperature: f32,
}

impl OpenAiCompatibleClient {
    pub fn new(config: &LlmConfig) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenerationError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model_name: config.model_name.clone(),
            temperature: config.temperature,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    async fn complete(&self, prompt: &str) -> Result<CompletionResponse, GenerationError> {
        let endpoint = self.endpoint();
        let request = ChatCompletionRequest {
            model: &self.model_name,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.temperature,
        };

        debug!(
            endpoint = %endpoint,
            model = %self.model_name,
            prompt_len = prompt.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(endpoint = %endpoint, error = %e, "Request failed");
                GenerationError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(endpoint = %endpoint, status = %status, "Backend returned error");
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<CompletionResponse>(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            GenerationError::Decode(format!("{}: {}", e, preview))
        })
    }
}

#[async_trait]
impl TextGenerator for OpenAiCompatibleClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let content = self.complete(prompt).await?.content();
        debug!(source = content.source(), "Completion content extracted");

        content.into_text().ok_or(GenerationError::EmptyContent)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
