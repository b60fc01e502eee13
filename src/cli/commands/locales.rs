use std::env;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, LocaleEntry, LocalesSummary, merge::display_path};
use crate::{
    aggregator::Aggregator,
    cli::{args::LocalesArgs, scan::scan_inputs},
};

pub fn locales(args: LocalesArgs) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to resolve the current directory")?;
    let aggregator = Aggregator::new(args.merge_options()?)?;
    let records = scan_inputs(&cwd, &args.input.inputs)?;

    let entries = records
        .iter()
        .filter(|record| !record.is_null())
        .map(|record| {
            let locale = aggregator.locale_of(&record.basename());
            let output_file = locale
                .as_deref()
                .map(|locale| aggregator.output_file_name(locale));
            LocaleEntry {
                path: display_path(&cwd, &record.path)
                    .to_string_lossy()
                    .into_owned(),
                locale,
                output_file,
            }
        })
        .collect();

    Ok(CommandResult {
        summary: CommandSummary::Locales(LocalesSummary {
            entries,
            as_json: args.json,
        }),
        errors: Vec::new(),
        warnings: Vec::new(),
    })
}
