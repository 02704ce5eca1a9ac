/*!
 * Translation caching functionality.
 *
 * This module memoizes title translations for one analysis session so that
 * repeated titles do not trigger repeated network calls. Entries are never
 * evicted and never persisted.
 */

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use parking_lot::RwLock;
use log::debug;

/// Cached outcome for one source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Translated title, or the original entry when nothing was translated
    pub translated_text: String,
    /// Whether `translated_text` is a real translation
    pub was_translated: bool,
}

impl CacheEntry {
    pub fn translated(text: impl Into<String>) -> Self {
        Self { translated_text: text.into(), was_translated: true }
    }

    pub fn untranslated(text: impl Into<String>) -> Self {
        Self { translated_text: text.into(), was_translated: false }
    }
}

/// Translation cache shared between the caller and background runs.
///
/// Cloning is cheap and shares storage. Each `put` replaces a single entry
/// under one write lock.
#[derive(Clone, Default)]
pub struct TranslationCache {
    /// Internal cache storage
    cache: Arc<RwLock<HashMap<String, CacheEntry>>>,

    /// Cache hit counter
    hits: Arc<AtomicUsize>,

    /// Cache miss counter
    misses: Arc<AtomicUsize>,
}

impl TranslationCache {
    /// Create a new, empty translation cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercase and trim
    pub fn normalize_key(text: &str) -> String {
        text.trim().to_lowercase()
    }

    /// Get a cached entry
    pub fn get(&self, text: &str) -> Option<CacheEntry> {
        let key = Self::normalize_key(text);
        let entry = self.cache.read().get(&key).cloned();

        match entry {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Cache hit for '{}'", truncate_text(&key, 30));
                Some(entry)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!("Cache miss for '{}'", truncate_text(&key, 30));
                None
            }
        }
    }

    /// Store an entry, replacing any previous one for the same key
    pub fn put(&self, text: &str, entry: CacheEntry) {
        let key = Self::normalize_key(text);
        debug!("Cached '{}' (translated: {})", truncate_text(&key, 30), entry.was_translated);
        self.cache.write().insert(key, entry);
    }

    /// Get cache statistics as `(hits, misses, hit_rate)`
    pub fn stats(&self) -> (usize, usize, f64) {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;

        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        (hits, misses, hit_rate)
    }

    /// Clear the cache and its counters
    pub fn clear(&self) {
        self.cache.write().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        debug!("Translation cache cleared");
    }

    /// Get the number of entries in the cache
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }
}

impl std::fmt::Debug for TranslationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationCache")
            .field("entries", &self.len())
            .finish()
    }
}

/// Truncate text to a maximum number of characters with ellipsis
fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => format!("{}...", &text[..index]),
        None => text.to_string(),
    }
}
