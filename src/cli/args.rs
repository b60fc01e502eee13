//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `merge`: Merge translation fragments into one file per locale
//! - `locales`: Show which locale each input file maps to

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::{
    json::{JsonReplacer, JsonSpace},
    locale::PatternLocale,
    merge::DeepMerge,
    options::{DEFAULT_OUTPUT_BASE_NAME, DEFAULT_SEPARATOR, MergeOptions},
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's input args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Merge(cmd)) => cmd.input.verbose,
            Some(Command::Locales(cmd)) => cmd.input.verbose,
            None => false,
        }
    }
}

/// Input selection and locale detection, shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Translation files, directories or glob patterns (e.g. "i18n/**/*.json")
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Separator between the file name and the locale
    #[arg(short, long, default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Regex whose first capture group is the locale (replaces separator matching)
    #[arg(long)]
    pub locale_pattern: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct MergeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Base name of the generated files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_BASE_NAME)]
    pub name: String,

    /// Output directory (defaults to the base directory of the first merged file)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Merge nested objects recursively instead of replacing top-level keys
    #[arg(long)]
    pub deep: bool,

    /// Only write these keys (repeatable or comma separated)
    #[arg(long = "key", value_delimiter = ',')]
    pub keys: Vec<String>,

    /// Indentation: a number of spaces (max 10) or a literal string
    #[arg(long, allow_hyphen_values = true)]
    pub space: Option<JsonSpace>,

    /// Report what would be written without touching the file system
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct LocalesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Base name of the generated files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_BASE_NAME)]
    pub name: String,

    /// Print the mapping as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge translation files into one JSON file per locale
    Merge(MergeArgs),
    /// List the locale detected for each input file
    Locales(LocalesArgs),
}

impl InputArgs {
    /// Options covering locale detection only.
    pub fn merge_options(&self) -> Result<MergeOptions> {
        let mut options = MergeOptions::default().with_separator(self.separator.as_str());
        if let Some(pattern) = &self.locale_pattern {
            options = options.with_locale_extractor(PatternLocale::new(pattern)?);
        }
        Ok(options)
    }
}

impl MergeArgs {
    pub fn merge_options(&self) -> Result<MergeOptions> {
        let mut options = self
            .input
            .merge_options()?
            .with_output_base_name(self.name.as_str());
        if self.deep {
            options = options.with_merge_strategy(DeepMerge);
        }
        if !self.keys.is_empty() {
            options = options.with_replacer(JsonReplacer::Keys(self.keys.clone()));
        }
        if let Some(space) = &self.space {
            options = options.with_space(space.clone());
        }
        Ok(options)
    }
}

impl LocalesArgs {
    pub fn merge_options(&self) -> Result<MergeOptions> {
        Ok(self
            .input
            .merge_options()?
            .with_output_base_name(self.name.as_str()))
    }
}
