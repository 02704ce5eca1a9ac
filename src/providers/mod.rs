/*!
 * Provider implementations for different translation services.
 *
 * This module contains client implementations for the public translation
 * endpoints used by the provider chain:
 * - MyMemory: translation memory service (tried first)
 * - Google: public Google Translate endpoint (fallback)
 * - Mock: scripted provider for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all translation providers
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing them to be used interchangeably in the provider chain.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Translate a phrase between two ISO 639-1 languages
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The trimmed translation or an error
    async fn translate(&self, text: &str, source_language: &str, target_language: &str) -> Result<String, ProviderError>;
}

/// Map a reqwest failure onto the provider error taxonomy
pub(crate) fn request_error(provider: &str, error: reqwest::Error) -> ProviderError {
    if error.is_timeout() || error.is_connect() {
        ProviderError::ConnectionError(format!("{}: {}", provider, error))
    } else {
        ProviderError::RequestFailed(format!("{}: {}", provider, error))
    }
}

pub mod google;
pub mod mock;
pub mod mymemory;
