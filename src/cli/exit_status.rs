use std::process::ExitCode;

/// Exit status for the CLI, following common conventions for batch tools.
///
/// - `Success` (0): Scan completed, including partial success where some
///   files were skipped due to read or parse errors.
/// - `Error` (2): Scan failed (invalid root, unwritable output, internal
///   error). No JSON is produced on stdout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Scan completed and JSON was written.
    Success,
    /// Scan failed due to an error.
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
