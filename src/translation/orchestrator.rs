/*!
 * Background translation of display entries.
 *
 * A run walks the entries strictly in order: title extraction, cache lookup,
 * language detection, provider chain, then a short pause. Every run gets a
 * monotonically increasing id; starting a run (or calling `abandon`) makes
 * all earlier runs stale. A stale run stops at the next item boundary and
 * its completion callback never fires, so only the latest run's results
 * reach the caller. Starting a run and completing one are serialized, so a
 * run cannot be superseded between its final staleness check and its
 * completion callback.
 */

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use anyhow::Result;
use log::{debug, info};
use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::analysis::records::DISPLAY_SEPARATOR;
use crate::app_config::Config;
use crate::errors::TranslationError;
use super::cache::{CacheEntry, TranslationCache};
use super::chain::ProviderChain;
use super::detector::{DetectedLanguage, LanguageDetector};

/// Progress of one run after an item has been processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationProgress {
    pub run_id: u64,
    pub completed: usize,
    pub total: usize,
}

impl TranslationProgress {
    /// Completed share in `[0, 1]`
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

impl fmt::Display for TranslationProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({:.0}%)", self.completed, self.total, self.fraction() * 100.0)
    }
}

/// Input and output of one translation pass
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRun {
    pub run_id: u64,
    pub input_entries: Vec<String>,
    /// Same length and order as `input_entries` once complete
    pub output_entries: Vec<String>,
    pub progress_fraction: f64,
}

impl TranslationRun {
    fn new(run_id: u64, input_entries: Vec<String>) -> Self {
        let capacity = input_entries.len();
        Self {
            run_id,
            input_entries,
            output_entries: Vec::with_capacity(capacity),
            progress_fraction: 0.0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.output_entries.len() == self.input_entries.len()
    }
}

/// What the completion callback of a current run receives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOutcome {
    pub run_id: u64,
    /// Output entries in input order
    pub entries: Vec<String>,
    /// Cache size when the run finished
    pub cache_size: usize,
}

/// Handle to a spawned run
pub struct RunHandle {
    run_id: u64,
    task: JoinHandle<Option<TranslationRun>>,
}

impl RunHandle {
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// Wait for the run; `None` when it was superseded before finishing
    pub async fn wait(self) -> Result<Option<TranslationRun>, TranslationError> {
        self.task.await
            .map_err(|e| TranslationError::TaskFailed(e.to_string()))
    }
}

/// Pacing and labelling of a run
#[derive(Debug, Clone)]
pub struct OrchestratorSettings {
    /// Pause after each processed item
    pub item_delay: Duration,
    /// Label placed before translated titles, e.g. `PT`
    pub target_label: String,
}

impl Default for OrchestratorSettings {
    fn default() -> Self {
        Self {
            item_delay: Duration::from_millis(100),
            target_label: "PT".to_string(),
        }
    }
}

/// Drives sequential, progress-reporting translation of display entries
#[derive(Debug, Clone)]
pub struct TranslationOrchestrator {
    chain: Arc<ProviderChain>,
    detector: Arc<LanguageDetector>,
    cache: TranslationCache,
    settings: OrchestratorSettings,
    latest_run: Arc<AtomicU64>,
    /// Held while a run id is issued and while a run completes
    transition: Arc<Mutex<()>>,
}

impl TranslationOrchestrator {
    /// Create an orchestrator with its own empty cache
    pub fn new(chain: ProviderChain, detector: LanguageDetector, settings: OrchestratorSettings) -> Self {
        Self {
            chain: Arc::new(chain),
            detector: Arc::new(detector),
            cache: TranslationCache::new(),
            settings,
            latest_run: Arc::new(AtomicU64::new(0)),
            transition: Arc::new(Mutex::new(())),
        }
    }

    /// Build the configured chain with the English/Portuguese detector
    pub fn from_config(config: &Config) -> Result<Self> {
        let chain = ProviderChain::from_config(config)?;
        let settings = OrchestratorSettings {
            item_delay: config.translation.item_delay(),
            target_label: chain.target_language().to_uppercase(),
        };
        Ok(Self::new(chain, LanguageDetector::english_portuguese(), settings))
    }

    /// The cache shared by every run of this orchestrator
    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// Id of the most recently started run (0 before any run)
    pub fn latest_run_id(&self) -> u64 {
        self.latest_run.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, run_id: u64) -> bool {
        self.latest_run_id() == run_id
    }

    /// Mark every in-flight run stale without starting a new one
    pub fn abandon(&self) {
        let id = self.begin_run();
        debug!("Abandoned translation runs before #{}", id);
    }

    fn begin_run(&self) -> u64 {
        let _guard = self.transition.lock();
        self.latest_run.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Translate entries on the current task.
    ///
    /// Starts a new run (superseding earlier ones) and returns it when
    /// finished; the run is partial if it was superseded midway.
    pub async fn translate_entries<P>(&self, entries: Vec<String>, on_progress: P) -> TranslationRun
    where
        P: Fn(&TranslationProgress) + Send + Sync,
    {
        let run_id = self.begin_run();
        self.execute(run_id, entries, &on_progress).await
    }

    /// Spawn a run on the tokio runtime.
    ///
    /// `on_complete` fires only if no newer run was started (and `abandon`
    /// was not called) before this one finished. It runs while run starts
    /// are blocked, so it must not start a run or call `abandon` itself.
    pub fn run_async<P, C>(&self, entries: Vec<String>, on_progress: P, on_complete: C) -> RunHandle
    where
        P: Fn(&TranslationProgress) + Send + Sync + 'static,
        C: FnOnce(TranslationOutcome) + Send + 'static,
    {
        let run_id = self.begin_run();
        let orchestrator = self.clone();

        let task = tokio::spawn(async move {
            let run = orchestrator.execute(run_id, entries, &on_progress).await;

            let _guard = orchestrator.transition.lock();
            if !run.is_complete() || !orchestrator.is_current(run_id) {
                info!("Discarding results of superseded translation run #{}", run_id);
                return None;
            }

            on_complete(TranslationOutcome {
                run_id,
                entries: run.output_entries.clone(),
                cache_size: orchestrator.cache.len(),
            });
            Some(run)
        });

        RunHandle { run_id, task }
    }

    async fn execute(&self, run_id: u64, entries: Vec<String>, on_progress: &(dyn Fn(&TranslationProgress) + Send + Sync)) -> TranslationRun {
        let total = entries.len();
        let mut run = TranslationRun::new(run_id, entries);
        info!("Translation run #{} started for {} entries", run_id, total);

        for index in 0..total {
            if !self.is_current(run_id) {
                debug!("Run #{} superseded after {}/{} entries", run_id, index, total);
                return run;
            }

            let output = self.translate_entry(&run.input_entries[index]).await;
            run.output_entries.push(output);

            let progress = TranslationProgress { run_id, completed: index + 1, total };
            run.progress_fraction = progress.fraction();
            on_progress(&progress);

            if !self.settings.item_delay.is_zero() {
                tokio::time::sleep(self.settings.item_delay).await;
            }
        }

        run.progress_fraction = 1.0;
        let (hits, misses, _) = self.cache.stats();
        info!(
            "Translation run #{} finished ({} cached entries, {} hits, {} misses)",
            run_id, self.cache.len(), hits, misses
        );
        run
    }

    /// Translate one display entry, consulting and filling the cache
    pub async fn translate_entry(&self, entry: &str) -> String {
        let (title, author) = split_entry(entry);

        if let Some(cached) = self.cache.get(title) {
            return if cached.was_translated {
                self.annotate(title, &cached.translated_text, author)
            } else {
                entry.to_string()
            };
        }

        if self.detector.detect(title) == DetectedLanguage::Target {
            self.cache.put(title, CacheEntry::untranslated(entry));
            return entry.to_string();
        }

        match self.chain.translate_with_fallback(title).await {
            Some(translated) => {
                self.cache.put(title, CacheEntry::translated(translated.clone()));
                self.annotate(title, &translated, author)
            }
            None => {
                self.cache.put(title, CacheEntry::untranslated(entry));
                entry.to_string()
            }
        }
    }

    /// `"{title} [{LABEL}: {translated}]"` plus the author suffix
    fn annotate(&self, title: &str, translated: &str, author: Option<&str>) -> String {
        let mut output = format!("{} [{}: {}]", title, self.settings.target_label, translated);
        if let Some(author) = author {
            output.push_str(DISPLAY_SEPARATOR);
            output.push_str(author);
        }
        output
    }
}

/// Split a display entry into the title and the author suffix, if any
pub fn split_entry(entry: &str) -> (&str, Option<&str>) {
    match entry.split_once(DISPLAY_SEPARATOR) {
        Some((title, author)) => (title, Some(author)),
        None => (entry, None),
    }
}
