/*!
 * # bibscan - academic listing analyzer
 *
 * A Rust library for checking tabular lists of articles and books.
 *
 * ## Features
 *
 * - Detect whether a CSV file holds an academic listing and which columns
 *   carry titles and authors (English and Portuguese column names)
 * - Exact duplicate detection on trimmed title (plus author when available)
 * - Text report and CSV export of the full listing and the duplicates
 * - Optional translation of English titles into the dataset's language
 *   through public translation services, with fallback and caching
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `table`: Table model and delimited-file reader
 * - `analysis`: Column classification, records and duplicate detection
 * - `report`: Text report and CSV export
 * - `translation`: Language detection, cache, provider chain and orchestrator
 * - `providers`: Clients for the translation services:
 *   - `providers::mymemory`: MyMemory API client
 *   - `providers::google`: Google Translate public endpoint client
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod analysis;
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod report;
pub mod table;
pub mod translation;

// Re-export main types for easier usage
pub use analysis::{AnalysisResult, analyze};
pub use app_config::Config;
pub use errors::{AnalysisError, ProviderError, TableError, TranslationError};
pub use table::{Table, TableReader};
pub use translation::{TranslationCache, TranslationOrchestrator};
