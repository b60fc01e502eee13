//! The translation aggregator state machine.
//!
//! Records are fed one at a time to [`Aggregator::process`]; once the input is
//! exhausted, [`Aggregator::flush`] turns every accumulated locale into a
//! synthesized output record. Nothing is emitted for merged content before
//! flush.

use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::{
    error::{OptionsError, PluginError, Warning},
    file::{Contents, FileRecord},
    json::stringify,
    locale::LocaleExtractor,
    merge::JsonObject,
    options::MergeOptions,
};

/// Positional metadata of the first accepted record, copied onto outputs.
#[derive(Debug, Clone)]
struct Anchor {
    cwd: PathBuf,
    base: PathBuf,
}

/// Groups translation records by locale and emits one merged file per locale.
pub struct Aggregator {
    options: MergeOptions,
    locale: Box<dyn LocaleExtractor>,
    merged: IndexMap<String, JsonObject>,
    anchor: Option<Anchor>,
    warnings: Vec<Warning>,
    accepted: usize,
}

impl Aggregator {
    /// Build an aggregator, resolving the locale extractor.
    ///
    /// Fails with [`OptionsError`] when the default extractor cannot be built
    /// from `options.separator`.
    pub fn new(mut options: MergeOptions) -> Result<Self, OptionsError> {
        let locale = options.take_locale_extractor()?;
        Ok(Self {
            options,
            locale,
            merged: IndexMap::new(),
            anchor: None,
            warnings: Vec::new(),
            accepted: 0,
        })
    }

    /// Handle one input record.
    ///
    /// Returns the record itself when it has no content (pass-through),
    /// `None` when it was merged or skipped.
    pub fn process(&mut self, record: FileRecord) -> Result<Option<FileRecord>, PluginError> {
        if record.is_null() {
            return Ok(Some(record));
        }
        let Contents::Buffer(bytes) = &record.contents else {
            return Err(PluginError::StreamingUnsupported {
                path: record.display_path(),
            });
        };

        let path = record.display_path();
        let locale = self
            .locale
            .locale(&record.basename())
            .filter(|locale| !locale.is_empty());
        let text = String::from_utf8_lossy(bytes);
        let text = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');

        let Some(locale) = locale else {
            self.skip(Warning::UnrecognizedLocale { path });
            return Ok(None);
        };
        if !text.starts_with('{') {
            self.skip(Warning::InvalidJsonRoot { path });
            return Ok(None);
        }

        if self.anchor.is_none() {
            self.anchor = Some(Anchor {
                cwd: record.cwd.clone(),
                base: record.base.clone(),
            });
        }
        self.accepted += 1;

        let parsed: JsonObject =
            serde_json::from_str(text).map_err(|err| PluginError::JsonParse {
                path: path.clone(),
                message: err.to_string(),
            })?;

        debug!(%locale, %path, keys = parsed.len(), "merging file");
        let target = self.merged.entry(locale).or_default();
        self.options.merge.merge(target, parsed);

        Ok(None)
    }

    /// Serialize every accumulated locale, in order of first appearance.
    ///
    /// Emits nothing when no record was accepted.
    pub fn flush(self) -> Result<Vec<FileRecord>, PluginError> {
        let Some(anchor) = self.anchor else {
            return Ok(Vec::new());
        };

        let mut files = Vec::with_capacity(self.merged.len());
        for (locale, object) in &self.merged {
            let contents =
                stringify(object, &self.options.json).map_err(|err| PluginError::Serialize {
                    locale: locale.clone(),
                    message: err.to_string(),
                })?;
            let path = anchor.base.join(self.options.output_file_name(locale));
            debug!(%locale, path = %path.display(), "flushing locale");

            files.push(FileRecord {
                cwd: anchor.cwd.clone(),
                base: anchor.base.clone(),
                path,
                contents: Contents::Buffer(contents.into_bytes()),
            });
        }
        Ok(files)
    }

    /// Locale of a file base name according to the configured extractor.
    pub fn locale_of(&self, file_base_name: &str) -> Option<String> {
        self.locale
            .locale(file_base_name)
            .filter(|locale| !locale.is_empty())
    }

    /// Name of the file a locale is flushed to.
    pub fn output_file_name(&self, locale: &str) -> String {
        self.options.output_file_name(locale)
    }

    /// Whether `file_base_name` is the name this aggregator would flush its
    /// own locale to, i.e. the output of an earlier run.
    pub fn is_output_file(&self, file_base_name: &str) -> bool {
        self.locale_of(file_base_name)
            .is_some_and(|locale| self.output_file_name(&locale) == file_base_name)
    }

    /// Locales seen so far, in order of first appearance.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.merged.keys().map(String::as_str)
    }

    /// Current accumulated object of a locale.
    pub fn merged(&self, locale: &str) -> Option<&JsonObject> {
        self.merged.get(locale)
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Number of records that passed both rejection checks.
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    fn skip(&mut self, warning: Warning) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }
}
