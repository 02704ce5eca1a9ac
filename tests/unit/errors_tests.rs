/*!
 * Tests for error types and conversions
 */

use bibscan::errors::{AnalysisError, ProviderError, TableError, TranslationError};

#[test]
fn test_providerError_rateLimitExceeded_shouldDisplayCorrectly() {
    let error = ProviderError::RateLimitExceeded("PLEASE SELECT TWO DISTINCT LANGUAGES".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Rate limit exceeded"));
    assert!(display.contains("PLEASE SELECT"));
}

#[test]
fn test_providerError_apiError_shouldDisplayStatusAndMessage() {
    let error = ProviderError::ApiError {
        status_code: 503,
        message: "Service unavailable".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("503"));
    assert!(display.contains("Service unavailable"));
}

#[test]
fn test_analysisError_noTitleColumn_shouldListColumns() {
    let error = AnalysisError::NoTitleColumn {
        columns: vec!["Journal".to_string(), "Year".to_string()],
    };
    assert!(error.to_string().contains("Journal, Year"));
    assert!(error.is_input_error());
    assert!(!error.is_validation_error());
}

#[test]
fn test_analysisError_notAcademic_shouldBeValidationError() {
    let error = AnalysisError::NotAcademic;
    assert!(error.is_validation_error());
    assert!(!error.is_input_error());
}

#[test]
fn test_tableError_fromIoError_shouldConvert() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "listing.csv");
    let table_error: TableError = io_error.into();
    assert!(matches!(table_error, TableError::Io(_)));
    assert!(table_error.to_string().contains("listing.csv"));
}

#[test]
fn test_translationError_taskFailed_shouldDisplayReason() {
    let error = TranslationError::TaskFailed("task cancelled".to_string());
    assert!(error.to_string().contains("task cancelled"));
}
