//! Gemini generateContent driver using reqwest.

use crate::gemini::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use onair_core::{GenerateRequest, ModelTier};
use onair_error::{DecodeError, DecodeErrorKind, GeminiError, GeminiErrorKind, OnairResult};
use onair_interface::OnairDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Default endpoint base.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default light-tier model, used for analysis and title batches.
pub const LIGHT_MODEL: &str = "gemini-3-flash-preview";

/// Default heavy-tier model, used for full script drafts.
pub const HEAVY_MODEL: &str = "gemini-3-pro-preview";

/// Gemini generateContent driver.
///
/// Holds one model identifier per tier. A request runs on its tier's model
/// unless it carries an explicit override. Calls are issued once, with no
/// retry or backoff; callers see the first failure as it happened.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    light_model: String,
    heavy_model: String,
}

impl GeminiClient {
    /// Creates a new Gemini client.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set.
    #[instrument(skip_all)]
    pub fn new() -> OnairResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Ok(Self::with_api_key(api_key))
    }

    /// Creates a new Gemini client with an explicit API key.
    #[instrument(skip_all)]
    pub fn with_api_key(api_key: String) -> Self {
        debug!("Created Gemini client");
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            light_model: LIGHT_MODEL.to_string(),
            heavy_model: HEAVY_MODEL.to_string(),
        }
    }

    /// Overrides the model identifier for each tier.
    pub fn with_models(mut self, light: impl Into<String>, heavy: impl Into<String>) -> Self {
        self.light_model = light.into();
        self.heavy_model = heavy.into();
        self
    }

    /// Overrides the endpoint base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn resolve_model<'a>(&'a self, req: &'a GenerateRequest) -> &'a str {
        match &req.model {
            Some(model) => model,
            None => self.model_name(req.tier),
        }
    }
}

#[async_trait]
impl OnairDriver for GeminiClient {
    #[instrument(skip(self, req), fields(tier = %req.tier))]
    async fn generate_json(&self, req: &GenerateRequest) -> OnairResult<serde_json::Value> {
        let model = self.resolve_model(req);
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);

        let body =
            GenerateContentRequest::from_instruction(&req.instruction, &req.schema, req.temperature);

        debug!(
            model = %model,
            instruction_len = req.instruction.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: error_text,
            })
            .into());
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response envelope");
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        let text = parsed
            .first_text()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyCandidate))?;

        debug!(response_len = text.len(), "Received candidate text");

        serde_json::from_str(&text).map_err(|e| {
            error!(error = ?e, "Candidate text was not valid JSON");
            DecodeError::new(DecodeErrorKind::InvalidJson(e.to_string())).into()
        })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Light => &self.light_model,
            ModelTier::Heavy => &self.heavy_model,
        }
    }
}
