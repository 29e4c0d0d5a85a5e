use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// The one failure class of the remote path. Callers absorb it and fall back
/// to the local rules; it is never shown to the user.
#[derive(Debug, Error)]
pub enum AugmentationUnavailable {
    #[error("completion endpoint is not configured")]
    NotConfigured,

    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion endpoint returned HTTP {0}")]
    Status(u16),

    #[error("completion response malformed: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl CompletionResponse {
    /// Text of the first candidate, parts concatenated.
    pub fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text.trim().to_string())
        }
    }
}

/// Client for a Gemini-style `generateContent` endpoint
pub struct CompletionClient {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    system_prompt: String,
}

impl CompletionClient {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        timeout: Option<Duration>,
    ) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().unwrap_or_else(|e| {
            log::warn!("⚠️ HTTP client with timeout unavailable ({}), using defaults", e);
            reqwest::Client::new()
        });

        Self {
            http_client,
            api_key,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            system_prompt: String::new(),
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Checks that an API key is present
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty() && self.api_key != "not-configured"
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            urlencoding::encode(&self.api_key)
        )
    }

    fn build_request(&self, prompt: &str) -> CompletionRequest {
        let system_instruction = if self.system_prompt.trim().is_empty() {
            None
        } else {
            Some(Content {
                role: None,
                parts: vec![Part {
                    text: Some(self.system_prompt.clone()),
                }],
            })
        };

        CompletionRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            system_instruction,
        }
    }

    /// Sends a single prompt. Any non-success outcome is reported as
    /// [`AugmentationUnavailable`]; there is no retry.
    pub async fn complete(&self, prompt: &str) -> Result<String, AugmentationUnavailable> {
        if !self.is_configured() {
            return Err(AugmentationUnavailable::NotConfigured);
        }

        let response = self
            .http_client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .json(&self.build_request(prompt))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            log::debug!("Completion API error ({}): {}", status, text);
            return Err(AugmentationUnavailable::Status(status.as_u16()));
        }

        let completion: CompletionResponse = serde_json::from_str(&text)
            .map_err(|e| AugmentationUnavailable::Malformed(e.to_string()))?;

        completion
            .first_text()
            .ok_or_else(|| AugmentationUnavailable::Malformed("no candidate text".to_string()))
    }
}
