use async_trait::async_trait;
use reqwest::{
    Client,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::message::MessageFormat;
use crate::error::{AppError, AppResult};
use crate::services::LanguageModelService;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 100;

pub struct AnthropicClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl AnthropicClient {
    pub fn new(base_url: String, api_key: Option<String>, model: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key,
            model,
        }
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::Configuration("ANTHROPIC_API_KEY is not set".to_string())
        })
    }

    fn messages_endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }

    fn headers(api_key: &str) -> AppResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(api_key).map_err(|_| {
            AppError::Configuration("ANTHROPIC_API_KEY contains invalid characters".to_string())
        })?;
        headers.insert("x-api-key", key);
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

#[async_trait]
impl LanguageModelService for AnthropicClient {
    async fn generate_commit_message(&self, diff: &str, format: MessageFormat) -> AppResult<String> {
        let api_key = self.api_key()?;
        let profile = format.profile();
        let request_body = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            temperature: 0.0,
            system: profile.system_prompt,
            messages: vec![RequestMessage {
                role: "user",
                content: profile.prompt(diff),
            }],
        };

        debug!(model = %self.model, ?format, diff_bytes = diff.len(), "requesting commit message");
        let response = self
            .http
            .post(self.messages_endpoint())
            .headers(Self::headers(api_key)?)
            .json(&request_body)
            .send()
            .await
            .map_err(|err| AppError::LanguageModel(format!("failed to call Anthropic: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            let detail = serde_json::from_str::<ErrorResponse>(&body)
                .map(|payload| payload.error.message)
                .unwrap_or(body);
            return Err(AppError::LanguageModel(format!(
                "Anthropic responded with {status}: {detail}"
            )));
        }

        let payload: MessagesResponse = response.json().await.map_err(|err| {
            AppError::LanguageModel(format!("failed to parse Anthropic response: {err}"))
        })?;

        payload
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .map(|text| text.trim().to_string())
            .ok_or_else(|| {
                AppError::LanguageModel("Anthropic response contained no text".to_string())
            })
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<RequestMessage>,
}

#[derive(Serialize)]
struct RequestMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}
