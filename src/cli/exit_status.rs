use std::process::ExitCode;

/// Exit status of the CLI.
///
/// - `Success` (0): every input was merged or skipped with a warning
/// - `Failure` (1): at least one record failed (stream content, invalid JSON)
/// - `Error` (2): the command itself failed (bad arguments, unreadable input, write error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
