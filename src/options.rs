use std::fmt;

use crate::{
    error::OptionsError,
    json::{JsonFormat, JsonReplacer, JsonSpace},
    locale::{LocaleExtractor, SeparatorLocale},
    merge::{MergeStrategy, ShallowMerge},
};

pub const DEFAULT_OUTPUT_BASE_NAME: &str = "translations";

pub const DEFAULT_SEPARATOR: &str = "_";

/// Construction options of an [`Aggregator`](crate::Aggregator).
///
/// | field | default |
/// |---|---|
/// | `output_base_name` | `"translations"` |
/// | `separator` | `"_"` |
/// | `locale` | `None`, i.e. [`SeparatorLocale`] built from `separator` |
/// | `merge` | [`ShallowMerge`] |
/// | `json` | compact output, no replacer |
pub struct MergeOptions {
    pub output_base_name: String,
    pub separator: String,
    pub locale: Option<Box<dyn LocaleExtractor>>,
    pub merge: Box<dyn MergeStrategy>,
    pub json: JsonFormat,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            output_base_name: DEFAULT_OUTPUT_BASE_NAME.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            locale: None,
            merge: Box::new(ShallowMerge),
            json: JsonFormat::default(),
        }
    }
}

impl fmt::Debug for MergeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeOptions")
            .field("output_base_name", &self.output_base_name)
            .field("separator", &self.separator)
            .field("custom_locale", &self.locale.is_some())
            .field("json", &self.json)
            .finish_non_exhaustive()
    }
}

impl MergeOptions {
    pub fn with_output_base_name(mut self, name: impl Into<String>) -> Self {
        self.output_base_name = name.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_locale_extractor(mut self, extractor: impl LocaleExtractor + 'static) -> Self {
        self.locale = Some(Box::new(extractor));
        self
    }

    pub fn with_merge_strategy(mut self, strategy: impl MergeStrategy + 'static) -> Self {
        self.merge = Box::new(strategy);
        self
    }

    pub fn with_replacer(mut self, replacer: JsonReplacer) -> Self {
        self.json.replacer = Some(replacer);
        self
    }

    pub fn with_space(mut self, space: JsonSpace) -> Self {
        self.json.space = Some(space);
        self
    }

    /// Output file name for a locale: `<output_base_name><separator><locale>.json`.
    pub fn output_file_name(&self, locale: &str) -> String {
        format!("{}{}{}.json", self.output_base_name, self.separator, locale)
    }

    /// Take the configured extractor, or build the default one from `separator`.
    pub(crate) fn take_locale_extractor(
        &mut self,
    ) -> Result<Box<dyn LocaleExtractor>, OptionsError> {
        match self.locale.take() {
            Some(extractor) => Ok(extractor),
            None => Ok(Box::new(SeparatorLocale::new(&self.separator)?)),
        }
    }
}
