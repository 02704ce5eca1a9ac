/*!
 * Translation enrichment of analysis listings.
 *
 * - `detector`: keyword-based source/target language detection
 * - `cache`: per-session memo of title translations
 * - `chain`: ordered provider fallback
 * - `orchestrator`: sequential, progress-reporting background runs
 */

// Re-export main types for easier usage
pub use self::cache::{CacheEntry, TranslationCache};
pub use self::chain::ProviderChain;
pub use self::detector::{DetectedLanguage, LanguageDetector};
pub use self::orchestrator::{
    OrchestratorSettings, RunHandle, TranslationOrchestrator, TranslationOutcome,
    TranslationProgress, TranslationRun,
};

// Submodules
pub mod cache;
pub mod chain;
pub mod detector;
pub mod orchestrator;
