//! Command-line interface: the host pipeline around the aggregator.
//!
//! Reads input files from disk, runs them through
//! [`merge_records`](crate::pipeline::merge_records), writes the merged
//! locale files and reports the outcome.

use std::process::ExitCode;

use anyhow::Result;

mod args;
pub mod commands;
mod exit_status;
mod logging;
mod report;
mod run;
mod scan;

pub use args::{Arguments, Command, InputArgs, LocalesArgs, MergeArgs};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();
    logging::init(verbose);

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    report::print(&result, verbose)?;

    Ok(result.exit_status().into())
}
