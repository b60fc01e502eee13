//! Locale extraction from file base names.
//!
//! Examples with the default `_` separator:
//! - "translations_en-US.json" -> Some("en-US")
//! - "file1_es-ES.json" -> Some("es-ES")
//! - "en.json" -> None (no separator)
//! - "a_b_en.json" -> Some("b_en") (leftmost separator wins)

use regex::Regex;

use crate::error::OptionsError;

/// Strategy mapping a file base name to its locale.
///
/// Returning `None` (or an empty string) skips the file with a warning.
pub trait LocaleExtractor {
    fn locale(&self, file_base_name: &str) -> Option<String>;
}

impl<F> LocaleExtractor for F
where
    F: Fn(&str) -> Option<String>,
{
    fn locale(&self, file_base_name: &str) -> Option<String> {
        self(file_base_name)
    }
}

/// Default extractor: `<separator><locale>.json` at the end of the name.
#[derive(Debug, Clone)]
pub struct SeparatorLocale {
    pattern: Regex,
}

impl SeparatorLocale {
    pub fn new(separator: &str) -> Result<Self, OptionsError> {
        let source = format!(r"{}(.+)\.json$", regex::escape(separator));
        let pattern = Regex::new(&source).map_err(|source_err| {
            OptionsError::InvalidLocalePattern {
                pattern: source.clone(),
                source: source_err,
            }
        })?;
        Ok(Self { pattern })
    }
}

impl LocaleExtractor for SeparatorLocale {
    fn locale(&self, file_base_name: &str) -> Option<String> {
        first_capture(&self.pattern, file_base_name)
    }
}

/// Extractor driven by a user supplied regex. The first capture group is the locale.
#[derive(Debug, Clone)]
pub struct PatternLocale {
    pattern: Regex,
}

impl PatternLocale {
    pub fn new(pattern: &str) -> Result<Self, OptionsError> {
        let regex = Regex::new(pattern).map_err(|source| OptionsError::InvalidLocalePattern {
            pattern: pattern.to_string(),
            source,
        })?;
        // captures_len counts the implicit whole-match group
        if regex.captures_len() < 2 {
            return Err(OptionsError::MissingCaptureGroup {
                pattern: pattern.to_string(),
            });
        }
        Ok(Self { pattern: regex })
    }
}

impl LocaleExtractor for PatternLocale {
    fn locale(&self, file_base_name: &str) -> Option<String> {
        first_capture(&self.pattern, file_base_name)
    }
}

fn first_capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|locale| !locale.is_empty())
        .map(str::to_string)
}
