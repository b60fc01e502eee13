//! Driver loop feeding a sequence of records through an [`Aggregator`].

use crate::{
    aggregator::Aggregator,
    error::{OptionsError, PluginError, Warning},
    file::FileRecord,
    options::MergeOptions,
};

/// Outcome of a full merge run.
#[derive(Debug, Default)]
pub struct MergeRun {
    /// Pass-through records in arrival order, followed by one record per locale.
    pub files: Vec<FileRecord>,
    /// Fatal errors, one per failed record (plus a flush failure, if any).
    pub errors: Vec<PluginError>,
    pub warnings: Vec<Warning>,
    /// Records that passed both rejection checks.
    pub accepted: usize,
    pub locales: Vec<String>,
}

impl MergeRun {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Process every record in order, then flush.
///
/// A fatal error only aborts the record that raised it; locales merged from
/// other records are still flushed.
pub fn merge_records<I>(options: MergeOptions, records: I) -> Result<MergeRun, OptionsError>
where
    I: IntoIterator<Item = FileRecord>,
{
    let mut aggregator = Aggregator::new(options)?;
    let mut run = MergeRun::default();

    for record in records {
        match aggregator.process(record) {
            Ok(Some(passed)) => run.files.push(passed),
            Ok(None) => {}
            Err(err) => run.errors.push(err),
        }
    }

    run.warnings = aggregator.warnings().to_vec();
    run.accepted = aggregator.accepted();
    run.locales = aggregator.locales().map(str::to_string).collect();

    match aggregator.flush() {
        Ok(files) => run.files.extend(files),
        Err(err) => run.errors.push(err),
    }

    Ok(run)
}
