use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::errors::ProviderError;
use crate::providers::{Provider, request_error};

/// Client for the unauthenticated Google Translate endpoint
/// (`client` / `sl` / `tl` / `dt` / `q` query convention)
#[derive(Debug)]
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// API endpoint URL
    endpoint: String,
}

impl GoogleTranslate {
    /// Create a new client
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    /// Build the request URL for a phrase
    pub fn request_url(&self, text: &str, source_language: &str, target_language: &str) -> Result<Url, ProviderError> {
        Url::parse_with_params(&self.endpoint, &[
            ("client", "gtx"),
            ("sl", source_language),
            ("tl", target_language),
            ("dt", "t"),
            ("q", text),
        ])
        .map_err(|e| ProviderError::RequestFailed(format!("Invalid Google endpoint '{}': {}", self.endpoint, e)))
    }

    /// Reassemble the translation from the first segment array.
    ///
    /// The payload looks like `[[["Olá ","Hello ",...],["mundo","world",...]], ...]`;
    /// the translated text is the concatenation of the first element of each
    /// fragment.
    pub fn parse_response(body: &str) -> Result<String, ProviderError> {
        let payload: Value = serde_json::from_str(body)
            .map_err(|e| ProviderError::ParseError(format!("Google: {}", e)))?;

        let fragments = payload.get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::ParseError("Google: missing translation segment".to_string()))?;

        let text: String = fragments.iter()
            .filter_map(|fragment| fragment.get(0).and_then(Value::as_str))
            .collect();
        let text = text.trim();

        if text.is_empty() {
            return Err(ProviderError::ParseError("Google returned an empty translation".to_string()));
        }

        Ok(text.to_string())
    }
}

#[async_trait]
impl Provider for GoogleTranslate {
    fn name(&self) -> &str {
        "Google"
    }

    async fn translate(&self, text: &str, source_language: &str, target_language: &str) -> Result<String, ProviderError> {
        let url = self.request_url(text, source_language, target_language)?;
        debug!("Google request for '{}'", text);

        let response = self.client.get(url)
            .send()
            .await
            .map_err(|e| request_error("Google", e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            return Err(ProviderError::ApiError { status_code: status.as_u16(), message });
        }

        let body = response.text().await
            .map_err(|e| request_error("Google", e))?;

        Self::parse_response(&body)
    }
}
