//! Report formatting and printing utilities.
//!
//! Kept separate from the merge logic so transmerge can be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, LocalesSummary, MergeSummary};
use crate::error::PluginError;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    print_errors_to(&result.errors, &mut io::stderr().lock());

    let mut stdout = io::stdout().lock();
    match &result.summary {
        CommandSummary::Merge(summary) => {
            let (errors, warnings) = (result.errors.len(), result.warnings.len());
            print_merge_to(summary, errors, warnings, verbose, &mut stdout);
        }
        CommandSummary::Locales(summary) => print_locales_to(summary, &mut stdout)?,
    }
    Ok(())
}

/// Print fatal errors, one per line.
pub fn print_errors_to<W: Write>(errors: &[PluginError], writer: &mut W) {
    for err in errors {
        let _ = writeln!(writer, "{} {}", "error:".bold().red(), err);
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

pub fn print_merge_to<W: Write>(
    summary: &MergeSummary,
    error_count: usize,
    warning_count: usize,
    verbose: bool,
    writer: &mut W,
) {
    let verb = if summary.is_dry_run {
        "Would write"
    } else {
        "Wrote"
    };
    for path in &summary.written {
        let _ = writeln!(writer, "  {} {}", verb.cyan(), path.display());
    }

    if verbose && !summary.locales.is_empty() {
        let locales = summary.locales.join(", ");
        let _ = writeln!(writer, "  {} {}", "Locales:".dimmed(), locales);
    }

    let headline = format!(
        "Merged {} of {} into {}",
        summary.accepted_count,
        plural(summary.input_count, "file"),
        plural(summary.locales.len(), "locale file"),
    );

    if error_count > 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} ({})", headline, plural(error_count, "error")).red()
        );
    } else if summary.accepted_count == 0 {
        let _ = writeln!(
            writer,
            "{} no translation files merged from {}",
            "warning:".bold().yellow(),
            plural(summary.input_count, "input file")
        );
    } else {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), headline.green());
    }

    if warning_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} skipped",
            "note:".bold(),
            plural(warning_count, "file"),
        );
    }
}

pub fn print_locales_to<W: Write>(summary: &LocalesSummary, writer: &mut W) -> Result<()> {
    if summary.as_json {
        let json = serde_json::to_string_pretty(&summary.entries)
            .context("Failed to serialize locale mapping")?;
        writeln!(writer, "{}", json)?;
        return Ok(());
    }

    for entry in &summary.entries {
        match (&entry.locale, &entry.output_file) {
            (Some(locale), Some(output)) => {
                writeln!(writer, "{} -> {} ({})", entry.path, locale.green(), output)?;
            }
            _ => {
                writeln!(writer, "{} -> {}", entry.path, "no locale".yellow())?;
            }
        }
    }
    Ok(())
}
