//! OpenAI-compatible chat completion client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use super::models::{ChatCompletionRequest, ChatCompletionResponse, LLMError};
use super::ChatModel;
use crate::config::LlmConfig;

pub struct OpenAIClient {
    http_client: Client,
    api_base: String,
    api_key: Option<String>,
    timeout_secs: u64,
}

impl OpenAIClient {
    pub fn new(config: &LlmConfig) -> Result<Self, reqwest::Error> {
        let http_client =
            Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;

        let api_key = config.api_key.clone().filter(|k| !k.trim().is_empty());

        Ok(Self {
            http_client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key,
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl ChatModel for OpenAIClient {
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<String, LLMError> {
        let api_key = self.api_key.as_deref().ok_or(LLMError::NotConfigured)?;
        let url = self.completions_url();

        tracing::debug!(
            "Calling LLM: model={}, messages={}, url={}",
            request.model,
            request.messages.len(),
            url
        );

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LLMError::Timeout(self.timeout_secs)
                } else {
                    LLMError::ApiError(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let body = response.text().await.unwrap_or_default();
            return Err(LLMError::RateLimited(body));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LLMError::ApiError(format!("HTTP {}: {}", status, body)));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LLMError::ParseError(e.to_string()))?;

        parsed.into_text()
    }
}
