//! Transmerge - merge per-locale JSON translation fragments
//!
//! Transmerge is a build step and library that groups JSON translation files by
//! the locale found in their file name (`common_en-US.json`, `auth_en-US.json`),
//! merges each group into one object and emits one file per locale
//! (`translations_en-US.json`).
//!
//! ## Module Structure
//!
//! - `aggregator`: The per-record / end-of-input merge state machine
//! - `cli`: Command-line interface layer (argument parsing, file scanning, reporting)
//! - `error`: Fatal errors, warnings and option errors
//! - `file`: File records flowing through the pipeline
//! - `json`: JSON text output with `JSON.stringify`-style replacer and space
//! - `locale`: Locale extraction strategies
//! - `merge`: Merge strategies
//! - `options`: Aggregator construction options
//! - `pipeline`: Driver loop over a sequence of records
//!
//! ## Example
//!
//! ```
//! use transmerge::{FileRecord, MergeOptions, merge_records};
//!
//! let records = vec![
//!     FileRecord::buffer("/app/i18n/common_en.json", r#"{"submit": "Submit"}"#),
//!     FileRecord::buffer("/app/i18n/auth_en.json", r#"{"signIn": "Sign in"}"#),
//! ];
//!
//! let run = merge_records(MergeOptions::default(), records).unwrap();
//! assert_eq!(run.files.len(), 1);
//! assert_eq!(run.files[0].basename(), "translations_en.json");
//! assert_eq!(
//!     run.files[0].bytes(),
//!     Some(&br#"{"submit":"Submit","signIn":"Sign in"}"#[..])
//! );
//! ```

pub mod aggregator;
pub mod cli;
pub mod error;
pub mod file;
pub mod json;
pub mod locale;
pub mod merge;
pub mod options;
pub mod pipeline;

pub use crate::{
    aggregator::Aggregator,
    error::{OptionsError, PLUGIN_NAME, PluginError, Warning},
    file::{Contents, FileRecord},
    json::{JsonFormat, JsonReplacer, JsonSpace},
    locale::{LocaleExtractor, PatternLocale, SeparatorLocale},
    merge::{DeepMerge, JsonObject, MergeStrategy, ShallowMerge},
    options::MergeOptions,
    pipeline::{MergeRun, merge_records},
};
