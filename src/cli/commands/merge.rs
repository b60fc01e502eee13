use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use super::{CommandResult, CommandSummary, MergeSummary};
use crate::{
    aggregator::Aggregator,
    cli::{args::MergeArgs, scan::scan_inputs},
    file::FileRecord,
    pipeline::merge_records,
};

pub fn merge(args: MergeArgs) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to resolve the current directory")?;
    let out_dir = args.out_dir.as_ref().map(|dir| cwd.join(dir));
    let outputs = Aggregator::new(args.merge_options()?)?;
    let records: Vec<FileRecord> = scan_inputs(&cwd, &args.input.inputs)?
        .into_iter()
        .filter(|record| !is_previous_output(&outputs, record, out_dir.as_deref()))
        .collect();
    let input_count = records.iter().filter(|r| !r.is_null()).count();

    let run = merge_records(args.merge_options()?, records)?;

    let mut written = Vec::new();
    for file in &run.files {
        let target = destination(file, out_dir.as_deref());
        if file.is_null() {
            // directories only need to exist under a separate output root
            if out_dir.is_some() && !args.dry_run {
                fs::create_dir_all(&target).with_context(|| {
                    format!("Failed to create directory: {}", target.display())
                })?;
            }
            continue;
        }

        if !args.dry_run {
            write_file(&target, file.bytes().unwrap_or_default())?;
        }
        debug!("wrote {}", target.display());
        written.push(display_path(&cwd, &target));
    }

    Ok(CommandResult {
        summary: CommandSummary::Merge(MergeSummary {
            input_count,
            accepted_count: run.accepted,
            locales: run.locales,
            written,
            is_dry_run: args.dry_run,
        }),
        errors: run.errors,
        warnings: run.warnings,
    })
}

/// A file this command would overwrite with its own merged output.
///
/// Such files are left out of the inputs so that keys removed from the
/// fragments do not survive through the previous result.
fn is_previous_output(
    outputs: &Aggregator,
    record: &FileRecord,
    out_dir: Option<&Path>,
) -> bool {
    let skip = !record.is_null()
        && outputs.is_output_file(&record.basename())
        && destination(record, out_dir) == record.path;
    if skip {
        debug!("skipping previous output: {}", record.path.display());
    }
    skip
}

fn destination(file: &FileRecord, out_dir: Option<&Path>) -> PathBuf {
    match out_dir {
        Some(dir) => dir.join(file.relative()),
        None => file.path.clone(),
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, contents)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Path relative to `cwd` when possible, for stable and short output.
pub(crate) fn display_path(cwd: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(cwd)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
