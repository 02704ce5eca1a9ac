use anyhow::{Result, Context, anyhow};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::oneshot;

use crate::analysis::{self, AnalysisResult};
use crate::app_config::Config;
use crate::report;
use crate::table::TableReader;
use crate::translation::{TranslationOrchestrator, TranslationOutcome};

// @module: Application controller for listing analysis

/// What to do with an analyzed file
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Translate the listing after analysis
    pub translate: bool,
    /// Where to export the full listing
    pub export_all: Option<PathBuf>,
    /// Where to export the duplicate listing
    pub export_duplicates: Option<PathBuf>,
    /// Field delimiter of the input file
    pub delimiter: u8,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            translate: false,
            export_all: None,
            export_duplicates: None,
            delimiter: b',',
        }
    }
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read a delimited file and analyze it
    pub fn analyze_file<P: AsRef<Path>>(&self, input_file: P, delimiter: u8) -> Result<AnalysisResult> {
        let input_file = input_file.as_ref();
        if !input_file.exists() {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let table = TableReader::new()
            .with_delimiter(delimiter)
            .read_path(input_file)
            .with_context(|| format!("Failed to read file: {:?}", input_file))?;

        let result = analysis::analyze(&table).map_err(|e| {
            let reason = if e.is_validation_error() {
                "not an academic listing"
            } else if e.is_input_error() {
                "no usable titles"
            } else {
                "invalid listing"
            };
            anyhow::Error::new(e).context(format!("Rejected {:?} ({})", input_file, reason))
        })?;

        Ok(result)
    }

    /// Translate a listing in the background while driving a progress bar.
    ///
    /// Each call uses a fresh orchestrator, so the cache never carries over
    /// between analyzed files.
    pub async fn translate_listing(&self, entries: Vec<String>) -> Result<TranslationOutcome> {
        let orchestrator = TranslationOrchestrator::from_config(&self.config)?;
        self.translate_with(&orchestrator, entries).await
    }

    /// Translate with a given orchestrator; fails if the run is superseded
    pub async fn translate_with(&self, orchestrator: &TranslationOrchestrator, entries: Vec<String>) -> Result<TranslationOutcome> {
        let progress_bar = ProgressBar::new(entries.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("█▓▒░"));
        progress_bar.set_message("Translating");

        let (sender, receiver) = oneshot::channel();
        let pb = progress_bar.clone();

        let handle = orchestrator.run_async(
            entries,
            move |progress| {
                pb.set_position(progress.completed as u64);
                pb.set_message(progress.to_string());
            },
            move |outcome| {
                let _ = sender.send(outcome);
            },
        );

        let run_id = handle.run_id();
        handle.wait().await?;
        progress_bar.finish_and_clear();

        let outcome = receiver.await
            .map_err(|_| anyhow!("Translation run #{} was superseded before completing", run_id))?;
        if outcome.run_id != orchestrator.latest_run_id() {
            return Err(anyhow!("Translation run #{} was superseded by run #{}", outcome.run_id, orchestrator.latest_run_id()));
        }
        Ok(outcome)
    }

    /// Run the main workflow for one input file
    pub async fn run(&self, input_file: PathBuf, options: RunOptions) -> Result<()> {
        let start_time = Instant::now();

        let result = self.analyze_file(&input_file, options.delimiter)?;
        println!("{}", report::render_report(&result));

        let mut listing = result.all_entries.clone();
        if options.translate {
            info!("Translating {} entries, please wait…", listing.len());
            let outcome = self.translate_listing(listing).await?;
            info!("Translation finished ({} cached titles)", outcome.cache_size);

            println!("TRANSLATED LISTING");
            for (i, entry) in outcome.entries.iter().enumerate() {
                println!("{:4}. {}", i + 1, entry);
            }
            listing = outcome.entries;
        }

        if let Some(path) = &options.export_all {
            report::export_all(&listing, path)?;
            info!("Full listing exported to {:?}", path);
        }

        if let Some(path) = &options.export_duplicates {
            if result.has_duplicates() {
                report::export_duplicates(&result.duplicate_entries, path)?;
                info!("Duplicate listing exported to {:?}", path);
            } else {
                warn!("No duplicate records to export");
            }
        }

        info!("Done in {}.", Self::format_duration(start_time.elapsed()));
        Ok(())
    }

    /// Format a duration as a compact human-readable string
    fn format_duration(duration: std::time::Duration) -> String {
        let total_secs = duration.as_secs();
        if total_secs >= 60 {
            format!("{}m {}s", total_secs / 60, total_secs % 60)
        } else {
            format!("{:.1}s", duration.as_secs_f64())
        }
    }
}
