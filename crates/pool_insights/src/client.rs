use std::time::Duration;

use reqwest::{blocking::Client, Url};

use crate::error::InsightsError;
use crate::model::{AnalysisResponse, RideDetails};
use crate::narrator::NarrativeSource;
use crate::parser::parse_generate_response;
use crate::prompt::build_prompt;
use crate::wire::{GenerateContentRequest, GenerateContentResponse};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Maps grounding is only available on the 2.5 model family.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Blocking client for Gemini `generateContent` with Maps grounding.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    url: Url,
}

impl GeminiClient {
    pub fn new(api_key: &str, config: &GeminiConfig) -> Result<Self, InsightsError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(InsightsError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(InsightsError::Client)?;

        let base = format!(
            "{}/models/{}:generateContent",
            config.endpoint.trim_end_matches('/'),
            config.model
        );
        let url = Url::parse(&base)
            .map_err(|err| InsightsError::Url(format!("failed to build Gemini URL: {}", err)))?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            url,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl NarrativeSource for GeminiClient {
    fn generate(&self, details: &RideDetails) -> Result<AnalysisResponse, InsightsError> {
        let body = GenerateContentRequest::grounded(build_prompt(details), details.origin());

        let response = self
            .client
            .post(self.url.clone())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(InsightsError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json()?;
        parse_generate_response(parsed)
    }
}
