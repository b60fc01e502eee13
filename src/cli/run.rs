use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, locales::locales, merge::merge},
};

/// Dispatch to the handler of the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Merge(args)) => merge(args),
        Some(Command::Locales(args)) => locales(args),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
