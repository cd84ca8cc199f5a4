use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// This module provides functions for validating ISO 639-1 (2-letter)
/// language codes, resolving their display names, and classifying codes
/// whose scripts read right-to-left.
/// Language codes whose scripts read right-to-left
///
/// The right-to-left flag on a catalog is derived from this set.
pub const RTL_LANGUAGE_CODES: [&str; 4] = ["ar", "he", "fa", "ur"];

/// Validate that a language code is a valid ISO 639-1 (2-letter) code
pub fn validate_language_code(code: &str) -> Result<()> {
    let normalized_code = code.trim().to_lowercase();

    if normalized_code.len() == 2 && Language::from_639_1(&normalized_code).is_some() {
        return Ok(());
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Normalize a language code for resource lookup (trimmed, lowercase)
pub fn normalize_language_code(code: &str) -> String {
    code.trim().to_lowercase()
}

/// Check whether a language code belongs to a right-to-left script
pub fn is_rtl_language(code: &str) -> bool {
    let normalized_code = normalize_language_code(code);
    RTL_LANGUAGE_CODES.contains(&normalized_code.as_str())
}

/// Get the English name of a language from its ISO 639-1 code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized_code = normalize_language_code(code);

    Language::from_639_1(&normalized_code)
        .map(|lang| lang.to_name().to_string())
        .ok_or_else(|| anyhow!("Unknown language code: {}", code))
}

/// Get the native name of a language from its ISO 639-1 code, when known
///
/// Falls back to the English name for languages isolang has no local name for.
pub fn get_native_language_name(code: &str) -> Result<String> {
    let normalized_code = normalize_language_code(code);

    let language = Language::from_639_1(&normalized_code)
        .ok_or_else(|| anyhow!("Unknown language code: {}", code))?;

    Ok(language
        .to_autonym()
        .unwrap_or_else(|| language.to_name())
        .to_string())
}
