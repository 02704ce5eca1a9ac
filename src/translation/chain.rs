/*!
 * Ordered provider fallback.
 *
 * Providers are tried in order until one yields a usable translation.
 * Provider errors stop here: the chain only ever answers with a
 * translation or `None`.
 */

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use log::{debug, warn};

use crate::app_config::{Config, TranslationProvider};
use crate::language_utils;
use crate::providers::Provider;
use crate::providers::google::GoogleTranslate;
use crate::providers::mymemory::MyMemory;

/// Ordered list of providers for one language pair
#[derive(Debug, Clone)]
pub struct ProviderChain {
    providers: Vec<Arc<dyn Provider>>,
    source_language: String,
    target_language: String,
    fallback_delay: Duration,
}

impl ProviderChain {
    /// Create a chain; languages are ISO 639-1 codes as the providers expect
    pub fn new(
        providers: Vec<Arc<dyn Provider>>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        fallback_delay: Duration,
    ) -> Self {
        Self {
            providers,
            source_language: source_language.into(),
            target_language: target_language.into(),
            fallback_delay,
        }
    }

    /// Build the configured providers in order
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = language_utils::normalize_to_part1(&config.source_language)?;
        let target = language_utils::normalize_to_part1(&config.target_language)?;

        let providers = config.translation.available_providers.iter()
            .map(|provider_config| -> Arc<dyn Provider> {
                let endpoint = provider_config.get_endpoint();
                let timeout = provider_config.timeout();
                match provider_config.provider_type {
                    TranslationProvider::MyMemory => Arc::new(MyMemory::new(endpoint, timeout)),
                    TranslationProvider::Google => Arc::new(GoogleTranslate::new(endpoint, timeout)),
                }
            })
            .collect();

        Ok(Self::new(providers, source, target, config.translation.fallback_delay()))
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Try each provider in order.
    ///
    /// Waits `fallback_delay` before every attempt after the first. A result
    /// equal to the input (ignoring case) counts as a failed attempt.
    pub async fn translate_with_fallback(&self, text: &str) -> Option<String> {
        let original = text.trim();
        if original.is_empty() {
            return None;
        }

        for (attempt, provider) in self.providers.iter().enumerate() {
            if attempt > 0 && !self.fallback_delay.is_zero() {
                tokio::time::sleep(self.fallback_delay).await;
            }

            match provider.translate(original, &self.source_language, &self.target_language).await {
                Ok(translation) => {
                    let translation = translation.trim();
                    if translation.is_empty() || translation.to_lowercase() == original.to_lowercase() {
                        debug!("{} returned no translation for '{}'", provider.name(), original);
                        continue;
                    }
                    return Some(translation.to_string());
                }
                Err(e) => {
                    warn!("{} failed for '{}': {}", provider.name(), original, e);
                }
            }
        }

        None
    }
}
