use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::errors::ProviderError;
use crate::providers::{Provider, request_error};

/// Prefix of the usage/quota messages MyMemory returns as translations
const SENTINEL_PREFIX: &str = "PLEASE";

/// MyMemory client (`q` / `langpair` query convention)
#[derive(Debug)]
pub struct MyMemory {
    /// HTTP client for API requests
    client: Client,
    /// API endpoint URL
    endpoint: String,
}

/// MyMemory response body
#[derive(Debug, Deserialize)]
pub struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    pub response_data: Option<MyMemoryData>,
}

/// Translation payload inside a MyMemory response
#[derive(Debug, Deserialize)]
pub struct MyMemoryData {
    #[serde(rename = "translatedText")]
    pub translated_text: Option<String>,
}

impl MyMemory {
    /// Create a new MyMemory client
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
        let langpair = format!("{}|{}", source_language, target_language);
        Url::parse_with_params(&self.endpoint, &[("q", text), ("langpair", langpair.as_str())])
            .map_err(|e| ProviderError::RequestFailed(format!("Invalid MyMemory endpoint '{}': {}", self.endpoint, e)))
    }

    /// Extract the translation from a response body
    pub fn parse_response(body: &str) -> Result<String, ProviderError> {
        let response: MyMemoryResponse = serde_json::from_str(body)
            .map_err(|e| ProviderError::ParseError(format!("MyMemory: {}", e)))?;

        let text = response.response_data
            .and_then(|data| data.translated_text)
            .map(|text| text.trim().to_string())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ProviderError::ParseError("MyMemory returned an empty translation".to_string()));
        }

        if text.starts_with(SENTINEL_PREFIX) {
            return Err(ProviderError::RateLimitExceeded(text));
        }

        Ok(text)
    }
}

#[async_trait]
impl Provider for MyMemory {
    fn name(&self) -> &str {
        "MyMemory"
    }

    async fn translate(&self, text: &str, source_language: &str, target_language: &str) -> Result<String, ProviderError> {
        let url = self.request_url(text, source_language, target_language)?;
        debug!("MyMemory request for '{}'", text);

        let response = self.client.get(url)
            .send()
            .await
            .map_err(|e| request_error("MyMemory", e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            return Err(ProviderError::ApiError { status_code: status.as_u16(), message });
        }

        let body = response.text().await
            .map_err(|e| request_error("MyMemory", e))?;

        Self::parse_response(&body)
    }
}
