//! Error and warning types reported by the aggregator.
//!
//! Fatal conditions are [`PluginError`] values and stop processing of the
//! record (or flush) that raised them. Skipped records are reported as
//! [`Warning`] values and never halt the run.

use thiserror::Error;

/// Identifier prefixed to every fatal error message.
pub const PLUGIN_NAME: &str = "transmerge";

/// Fatal error raised while processing a record or flushing locales.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PluginError {
    /// The record's content is a stream instead of a complete buffer.
    #[error("{plugin}: streaming not supported: {path}", plugin = PLUGIN_NAME)]
    StreamingUnsupported { path: String },

    /// The record's content looked like an object but is not valid JSON.
    #[error("{plugin}: parsing {path}: {message}", plugin = PLUGIN_NAME)]
    JsonParse { path: String, message: String },

    /// A merged locale could not be turned back into JSON text.
    #[error("{plugin}: serializing locale {locale}: {message}", plugin = PLUGIN_NAME)]
    Serialize { locale: String, message: String },
}

impl PluginError {
    /// Path of the input file involved, when the error concerns one.
    pub fn path(&self) -> Option<&str> {
        match self {
            PluginError::StreamingUnsupported { path } | PluginError::JsonParse { path, .. } => {
                Some(path)
            }
            PluginError::Serialize { .. } => None,
        }
    }
}

/// Non-fatal condition: the record was skipped and did not contribute to any locale.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Warning {
    /// No locale could be extracted from the file name.
    #[error("no locale found in file name, ignoring file: {path}")]
    UnrecognizedLocale { path: String },
    /// The trimmed content does not start with `{`.
    #[error("JSON root is not an object, ignoring file: {path}")]
    InvalidJsonRoot { path: String },
}

impl Warning {
    pub fn path(&self) -> &str {
        match self {
            Warning::UnrecognizedLocale { path } | Warning::InvalidJsonRoot { path } => path,
        }
    }
}

/// Invalid construction options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid locale pattern \"{pattern}\": {source}")]
    InvalidLocalePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("locale pattern \"{pattern}\" must contain a capture group for the locale")]
    MissingCaptureGroup { pattern: String },
}
