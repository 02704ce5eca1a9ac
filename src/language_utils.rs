use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for the configured translation pair
///
/// Both public translation endpoints expect two-letter ISO 639-1 codes,
/// while users may configure either 639-1 or 639-2 codes. These helpers
/// resolve whatever was configured into the form the providers accept.

/// ISO 639-2/B codes that differ from their 639-2/T counterpart
const BIBLIOGRAPHIC_CODES: &[(&str, &str)] = &[
    ("fre", "fra"),
    ("ger", "deu"),
    ("dut", "nld"),
    ("gre", "ell"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("per", "fas"),
    ("wel", "cym"),
];

/// Resolve a 2- or 3-letter code into an isolang language
fn resolve(code: &str) -> Option<Language> {
    let normalized = code.trim().to_lowercase();

    match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => {
            let terminological = BIBLIOGRAPHIC_CODES.iter()
                .find(|(bibliographic, _)| *bibliographic == normalized)
                .map(|(_, terminological)| *terminological)
                .unwrap_or(normalized.as_str());
            Language::from_639_3(terminological)
        }
        _ => None,
    }
}

/// Validate that a code names a known language
pub fn validate_language_code(code: &str) -> Result<()> {
    resolve(code)
        .map(|_| ())
        .ok_or_else(|| anyhow!("Invalid language code: {}", code))
}

/// Normalize a language code to ISO 639-1, the form both providers use
pub fn normalize_to_part1(code: &str) -> Result<String> {
    let lang = resolve(code)
        .ok_or_else(|| anyhow!("Cannot normalize invalid language code: {}", code))?;

    lang.to_639_1()
        .map(|c| c.to_string())
        .ok_or_else(|| anyhow!("Language '{}' has no two-letter code", lang.to_name()))
}

/// Check if two language codes represent the same language
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (resolve(code1), resolve(code2)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
