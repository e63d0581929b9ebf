//! Validation command for overview exports.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{print_json, wants_json, CliError, CliResult};
use crate::cli::inspect::OverviewSummary;
use crate::config::Config;
use crate::error::OverviewError;

/// Validate an overview export and report the first error
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to overview YAML export
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response of the validate command.
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    /// Whether the export decoded cleanly
    pub valid: bool,
    /// Error details when invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationMessage>,
    /// Counts when valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<OverviewSummary>,
}

/// Error details in a [`ValidationResponse`].
#[derive(Debug, Serialize)]
pub struct ValidationMessage {
    /// Error classification (decode, absent, invalid-code, invalid-format)
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let result = crate::parser::parse_overview_file(&self.file);

        let response = match &result {
            Ok(overview) => ValidationResponse {
                valid: true,
                error: None,
                summary: Some(OverviewSummary::from(overview)),
            },
            Err(err) => ValidationResponse {
                valid: false,
                error: Some(ValidationMessage {
                    kind: err.kind().to_string(),
                    message: err.to_string(),
                }),
                summary: None,
            },
        };

        if wants_json(self.json, config) {
            print_json(&response, config.output.pretty)?;
        } else if let Some(summary) = &response.summary {
            println!("✓ Validation passed");
            println!("\nContents:");
            println!("  Backgrounds: {}", summary.backgrounds);
            println!("  Flags:       {}", summary.flags);
            println!(
                "  Columns:     {} ({} visible)",
                summary.columns, summary.enabled_columns
            );
            println!("  Presets:     {}", summary.presets);
        } else if let Some(error) = &response.error {
            println!("✗ Validation failed");
            println!("  [{}] {}", error.kind, error.message);
        }

        match result {
            Ok(_) => Ok(()),
            Err(err @ OverviewError::Read { .. }) => Err(CliError::from(err)),
            Err(_) => Err(CliError::validation("Validation failed")),
        }
    }
}
