//! Shared CLI types: errors, exit codes and output helpers.

use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::config::{Config, OutputFormat};
use crate::error::OverviewError;
use crate::models::Overview;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Overview failed to decode or validate
    Validation = 1,
    /// File, config or serialization problem
    Io = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug)]
pub struct CliError {
    /// Exit code to terminate with
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Io,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<OverviewError> for CliError {
    fn from(err: OverviewError) -> Self {
        match err {
            OverviewError::Read { .. } => Self::io(err.to_string()),
            other => Self::validation(other.to_string()),
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// True when output should be JSON, either by flag or by configuration.
pub fn wants_json(json_flag: bool, config: &Config) -> bool {
    json_flag || config.output.format == OutputFormat::Json
}

/// Prints `value` as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{rendered}");
    Ok(())
}

/// Loads an overview export, mapping failures to CLI errors.
pub fn load_overview(path: &Path) -> CliResult<Overview> {
    crate::parser::parse_overview_file(path).map_err(CliError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("x").kind.code(), 1);
        assert_eq!(CliError::io("x").kind.code(), 2);
    }

    #[test]
    fn test_from_overview_error() {
        let err: CliError = OverviewError::NoColor.into();
        assert_eq!(err.kind, ExitCode::Validation);

        let err: CliError = OverviewError::Read {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }
        .into();
        assert_eq!(err.kind, ExitCode::Io);
    }

    #[test]
    fn test_wants_json() {
        let mut config = Config::new();
        assert!(!wants_json(false, &config));
        assert!(wants_json(true, &config));
        config.output.format = OutputFormat::Json;
        assert!(wants_json(false, &config));
    }
}
