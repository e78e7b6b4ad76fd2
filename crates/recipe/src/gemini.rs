use reqwest::Client;
use serde::{Deserialize, Serialize};
use smartchef_shared::recipe::GeneratedRecipe;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{
    extract::decode_recipe,
    prompt::build_prompt,
    provider::{GenerationProvider, ProviderError},
    request::GenerationRequest,
};

pub const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

/// Google Gemini `generateContent` client.
pub struct GeminiProvider {
    api_key: String,
    client: Client,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            model: DEFAULT_MODEL.to_owned(),
            base_url: API_BASE_URL.to_owned(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Replaces the HTTP client with one that gives up after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> anyhow::Result<Self> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    fn build_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    fn extract_text(response_text: &str) -> Result<String, ProviderError> {
        let response: GeminiResponse = serde_json::from_str(response_text)?;

        if let Some(error) = response.error {
            return Err(ProviderError::Http(error.message));
        }

        response
            .candidates
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ProviderError::EmptyResponse)
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        debug!("sending request to Gemini");

        let response = self
            .client
            .post(self.build_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.without_url().to_string()))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::Http(e.without_url().to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<GeminiResponse>(&response_text)
                .ok()
                .and_then(|r| r.error)
                .map_or(response_text, |e| e.message);

            return Err(ProviderError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Self::extract_text(&response_text)
    }
}

#[async_trait::async_trait]
impl GenerationProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    #[instrument(skip_all, fields(model = %self.model))]
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedRecipe, ProviderError> {
        let prompt = build_prompt(request);
        let text = self.complete(&prompt).await?;

        decode_recipe(&text)
    }
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
