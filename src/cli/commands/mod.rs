pub mod locales;
pub mod merge;

use std::path::PathBuf;

use serde::Serialize;

use super::exit_status::ExitStatus;
use crate::error::{PluginError, Warning};

#[derive(Debug)]
pub enum CommandSummary {
    Merge(MergeSummary),
    Locales(LocalesSummary),
}

#[derive(Debug)]
pub struct MergeSummary {
    /// Input records carrying content (directories excluded).
    pub input_count: usize,
    pub accepted_count: usize,
    pub locales: Vec<String>,
    /// Files written, or that would be written with `--dry-run`.
    pub written: Vec<PathBuf>,
    pub is_dry_run: bool,
}

#[derive(Debug)]
pub struct LocalesSummary {
    pub entries: Vec<LocaleEntry>,
    pub as_json: bool,
}

/// Locale detected for one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleEntry {
    pub path: String,
    pub locale: Option<String>,
    pub output_file: Option<String>,
}

/// Result of running a transmerge command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub errors: Vec<PluginError>,
    pub warnings: Vec<Warning>,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.errors.is_empty() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}
