/*!
 * Common test utilities for the bibscan test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tempfile::TempDir;

use bibscan::providers::Provider;
use bibscan::translation::{LanguageDetector, OrchestratorSettings, ProviderChain, TranslationOrchestrator};

/// Enable log output for a test run (`RUST_LOG=debug cargo test`)
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &[u8]) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a small listing with one duplicated article
pub fn create_test_listing(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = "Title,Author,Year\n\
        Deep Learning for Image Analysis,Smith,2019\n\
        Deep Learning for Image Analysis,Smith,2019\n\
        Uma análise de sistemas distribuídos,Silva,2021\n\
        A Framework for Software Evaluation,Jones,2020\n";
    create_test_file(dir, filename, content.as_bytes())
}

/// Chain over the given providers for English to Portuguese, without pauses
pub fn mock_chain(providers: Vec<Arc<dyn Provider>>) -> ProviderChain {
    ProviderChain::new(providers, "en", "pt", Duration::ZERO)
}

/// Orchestrator over the given providers, without pauses
pub fn mock_orchestrator(providers: Vec<Arc<dyn Provider>>) -> TranslationOrchestrator {
    let settings = OrchestratorSettings {
        item_delay: Duration::ZERO,
        target_label: "PT".to_string(),
    };
    TranslationOrchestrator::new(mock_chain(providers), LanguageDetector::english_portuguese(), settings)
}
