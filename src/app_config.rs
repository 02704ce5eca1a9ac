use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::time::Duration;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Language titles are translated from (ISO)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Language of the dataset and of the translations (ISO)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Translation config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation provider type
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    // @provider: MyMemory translation memory service
    MyMemory,
    // @provider: Google Translate public endpoint
    Google,
}

impl TranslationProvider {
    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::MyMemory => "mymemory".to_string(),
            Self::Google => "google".to_string(),
        }
    }
}

impl std::fmt::Display for TranslationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

/// Provider configuration entry
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Provider type identifier
    #[serde(rename = "type")]
    pub provider_type: TranslationProvider,

    // @field: Service URL
    #[serde(default = "String::new")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    // @param provider_type: Provider enum
    // @returns: Provider config with defaults
    pub fn new(provider_type: TranslationProvider) -> Self {
        Self {
            provider_type,
            endpoint: default_endpoint(provider_type),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Endpoint to query, falling back to the public one
    pub fn get_endpoint(&self) -> String {
        if self.endpoint.is_empty() {
            default_endpoint(self.provider_type)
        } else {
            self.endpoint.clone()
        }
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Whether entries are translated after analysis
    #[serde(default)]
    pub enabled: bool,

    /// Providers in the order they are tried
    #[serde(default = "default_providers")]
    pub available_providers: Vec<ProviderConfig>,

    /// Common translation settings
    #[serde(default)]
    pub common: TranslationCommonConfig,
}

/// Pacing applicable to all providers
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationCommonConfig {
    /// Pause before falling back to the next provider, in milliseconds
    #[serde(default = "default_fallback_delay_ms")]
    pub fallback_delay_ms: u64,

    /// Pause after each translated entry, in milliseconds
    #[serde(default = "default_item_delay_ms")]
    pub item_delay_ms: u64,
}

impl Default for TranslationCommonConfig {
    fn default() -> Self {
        Self {
            fallback_delay_ms: default_fallback_delay_ms(),
            item_delay_ms: default_item_delay_ms(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching `log` filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "pt".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_fallback_delay_ms() -> u64 {
    500
}

fn default_item_delay_ms() -> u64 {
    100
}

fn default_endpoint(provider: TranslationProvider) -> String {
    match provider {
        TranslationProvider::MyMemory => "https://api.mymemory.translated.net/get".to_string(),
        TranslationProvider::Google => "https://translate.googleapis.com/translate_a/single".to_string(),
    }
}

fn default_providers() -> Vec<ProviderConfig> {
    vec![
        ProviderConfig::new(TranslationProvider::MyMemory),
        ProviderConfig::new(TranslationProvider::Google),
    ]
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        crate::language_utils::validate_language_code(&self.source_language)?;
        crate::language_utils::validate_language_code(&self.target_language)?;

        if crate::language_utils::language_codes_match(&self.source_language, &self.target_language) {
            return Err(anyhow!(
                "Source and target languages must differ (both are '{}')",
                self.target_language
            ));
        }

        if self.translation.available_providers.is_empty() {
            return Err(anyhow!("At least one translation provider must be configured"));
        }

        if let Some(provider) = self.translation.available_providers.iter().find(|p| p.timeout_secs == 0) {
            return Err(anyhow!("Timeout for provider '{}' must be greater than zero", provider.provider_type));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl TranslationConfig {
    pub fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.common.fallback_delay_ms)
    }

    pub fn item_delay(&self) -> Duration {
        Duration::from_millis(self.common.item_delay_ms)
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            available_providers: default_providers(),
            common: TranslationCommonConfig::default(),
        }
    }
}
