/*!
 * Integration tests for application lifecycle
 */

use std::sync::Arc;

use anyhow::Result;
use bibscan::app_config::Config;
use bibscan::app_controller::{Controller, RunOptions};
use bibscan::errors::AnalysisError;
use bibscan::providers::mock::MockProvider;
use crate::common;

/// Test the controller with custom configuration
#[test]
fn test_controller_withCustomLanguages_shouldInitialize() -> Result<()> {
    let mut config = Config::default();
    config.source_language = "es".to_string();
    config.target_language = "por".to_string();

    let controller = Controller::with_config(config)?;
    assert_eq!(controller.config().source_language, "es");
    Ok(())
}

/// An invalid configuration never produces a controller
#[test]
fn test_controller_withSameLanguages_shouldFail() {
    let mut config = Config::default();
    config.source_language = "pt".to_string();
    assert!(Controller::with_config(config).is_err());
}

#[test]
fn test_analyze_file_withDuplicatedArticle_shouldReportIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_listing(temp_dir.path(), "papers.csv")?;

    let controller = Controller::with_config(Config::default())?;
    let result = controller.analyze_file(&path, b',')?;

    assert_eq!(result.total_count, 4);
    assert_eq!(result.duplicate_entries.len(), 2);
    assert_eq!(result.duplicate_entries[0], "Deep Learning for Image Analysis — Smith");
    Ok(())
}

#[test]
fn test_analyze_file_withSemicolonListing_shouldUseDelimiter() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "livros.csv",
        "Título;Autor\nIntrodução à programação;Souza\nIntrodução à programação;Souza\n".as_bytes(),
    )?;

    let controller = Controller::with_config(Config::default())?;
    let result = controller.analyze_file(&path, b';')?;

    assert_eq!(result.author_column.as_deref(), Some("Autor"));
    assert!(result.has_duplicates());
    Ok(())
}

#[test]
fn test_analyze_file_withNonAcademicFile_shouldRejectIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "people.csv", b"Name\nAnn\nBob\nCarla\n")?;

    let controller = Controller::with_config(Config::default())?;
    let error = controller.analyze_file(&path, b',').unwrap_err();

    assert_eq!(error.downcast_ref::<AnalysisError>(), Some(&AnalysisError::NotAcademic));
    assert!(error.to_string().contains("not an academic listing"));
    Ok(())
}

#[test]
fn test_analyze_file_withMissingFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default())?;

    assert!(controller.analyze_file(temp_dir.path().join("missing.csv"), b',').is_err());
    Ok(())
}

#[test]
fn test_run_options_default_shouldUseCommaDelimiter() {
    let options = RunOptions {
        translate: true,
        ..Default::default()
    };
    assert_eq!(options.delimiter, b',');
    assert_eq!(RunOptions::new().delimiter, b',');
}

#[tokio::test]
async fn test_run_withExportPaths_shouldWriteBothFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_listing(temp_dir.path(), "papers.csv")?;
    let all_path = temp_dir.path().join("all.csv");
    let duplicates_path = temp_dir.path().join("duplicates.csv");

    let options = RunOptions {
        export_all: Some(all_path.clone()),
        export_duplicates: Some(duplicates_path.clone()),
        ..RunOptions::new()
    };

    let controller = Controller::with_config(Config::default())?;
    controller.run(input, options).await?;

    let all = std::fs::read_to_string(&all_path)?;
    assert!(all.contains("SUMMARY:,Total of 4 records"));
    let duplicates = std::fs::read_to_string(&duplicates_path)?;
    assert!(duplicates.contains("SUMMARY:,Total of 2 duplicates"));
    Ok(())
}

#[tokio::test]
async fn test_translate_with_mockOrchestrator_shouldReturnTranslatedListing() -> Result<()> {
    common::init_logger();
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_listing(temp_dir.path(), "papers.csv")?;

    let controller = Controller::with_config(Config::default())?;
    let result = controller.analyze_file(&path, b',')?;

    let provider = MockProvider::working();
    let calls = provider.counter();
    let orchestrator = common::mock_orchestrator(vec![Arc::new(provider)]);

    let outcome = controller.translate_with(&orchestrator, result.all_entries.clone()).await?;

    assert_eq!(outcome.entries.len(), result.all_entries.len());
    assert_eq!(
        outcome.entries[0],
        "Deep Learning for Image Analysis [PT: [pt] Deep Learning for Image Analysis] — Smith"
    );
    assert_eq!(outcome.entries[2], "Uma análise de sistemas distribuídos — Silva");
    // Repeated title and Portuguese title need no request
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 2);
    assert_eq!(outcome.cache_size, 3);
    Ok(())
}
