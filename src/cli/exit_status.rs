use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Run completed. Files skipped for being missing or
///   unreadable do not fail the run; they are reported and the remaining
///   files are still processed.
/// - `Error` (2): Command failed due to an unrecoverable error (config
///   error, write failure, invalid pattern, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed, possibly with skipped files.
    Success,
    /// Command failed due to an unrecoverable error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
