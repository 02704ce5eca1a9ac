/*!
 * Lightweight lexical language detection.
 *
 * Distinguishes the source language (English) from the target language
 * (Portuguese) by counting hits against two keyword lists made of common
 * function words and academic nouns. No external calls.
 */

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Unicode word tokens
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\w+\b").expect("Invalid word regex")
});

/// Minimum trimmed length (in characters) for detection to run
const MIN_TEXT_LENGTH: usize = 3;

/// Minimum source-language hits needed to classify text as source
const MIN_SOURCE_SCORE: usize = 2;

const ENGLISH_KEYWORDS: &[&str] = &[
    "the", "of", "and", "in", "for", "on", "with", "to", "from", "by",
    "an", "is", "are", "using", "based", "analysis", "study", "system",
    "systems", "framework", "approach", "method", "model", "learning",
    "data", "review", "design", "research", "development", "evaluation",
];

const PORTUGUESE_KEYWORDS: &[&str] = &[
    "de", "da", "do", "das", "dos", "em", "para", "com", "uma", "um",
    "por", "sobre", "na", "no", "análise", "estudo", "sistema", "sistemas",
    "modelo", "aprendizado", "dados", "revisão", "pesquisa",
    "desenvolvimento", "avaliação", "aplicação", "proposta", "ensino",
];

/// Language a text was classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedLanguage {
    /// Foreign text that should be translated
    Source,
    /// Already in the dataset's language
    Target,
}

/// Keyword-frequency classifier for one language pair
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    source_keywords: HashSet<&'static str>,
    target_keywords: HashSet<&'static str>,
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::english_portuguese()
    }
}

impl LanguageDetector {
    /// Detector with custom keyword lists (lowercase words)
    pub fn new(source_keywords: &[&'static str], target_keywords: &[&'static str]) -> Self {
        Self {
            source_keywords: source_keywords.iter().copied().collect(),
            target_keywords: target_keywords.iter().copied().collect(),
        }
    }

    /// English source, Portuguese target
    pub fn english_portuguese() -> Self {
        Self::new(ENGLISH_KEYWORDS, PORTUGUESE_KEYWORDS)
    }

    /// Keyword hits as `(source, target)`
    pub fn scores(&self, text: &str) -> (usize, usize) {
        let lowered = text.to_lowercase();
        let mut source = 0;
        let mut target = 0;

        for token in WORD_REGEX.find_iter(&lowered) {
            let word = token.as_str();
            if self.source_keywords.contains(word) {
                source += 1;
            }
            if self.target_keywords.contains(word) {
                target += 1;
            }
        }

        (source, target)
    }

    /// Classify a text. Short text is always the target language.
    pub fn detect(&self, text: &str) -> DetectedLanguage {
        if text.trim().chars().count() < MIN_TEXT_LENGTH {
            return DetectedLanguage::Target;
        }

        let (source, target) = self.scores(text);
        if source > target && source >= MIN_SOURCE_SCORE {
            DetectedLanguage::Source
        } else {
            DetectedLanguage::Target
        }
    }
}
