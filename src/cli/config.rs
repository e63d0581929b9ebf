//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, OutputFormat, LOG_LEVELS};
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Default output format (text or json)
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, value_name = "BOOL")]
    pretty: Option<bool>,

    /// Default log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        if self.json {
            print_json(&config, true)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.format.is_none() && self.pretty.is_none() && self.log_level.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --format, --pretty, or --log-level",
            ));
        }

        let mut config = Config::load().unwrap_or_default();
        apply(&mut config, self)?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        tracing::info!("configuration saved");
        println!("Configuration updated successfully.");
        Ok(())
    }
}

fn apply(config: &mut Config, args: &ConfigSetArgs) -> CliResult<()> {
    if let Some(format) = &args.format {
        config.output.format = format
            .parse::<OutputFormat>()
            .map_err(|e| CliError::validation(e.to_string()))?;
    }

    if let Some(pretty) = args.pretty {
        config.output.pretty = pretty;
    }

    if let Some(level) = &args.log_level {
        let level = level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(CliError::validation(format!(
                "Invalid log level '{level}'. Expected one of: {}",
                LOG_LEVELS.join(", ")
            )));
        }
        config.logging.level = level;
    }

    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Overview SDK Configuration");
    println!("==========================");
    println!();

    println!("Output:");
    println!(
        "  Format: {}",
        match config.output.format {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    );
    println!("  Pretty JSON: {}", config.output.pretty);
    println!();

    println!("Logging:");
    println!("  Level: {}", config.logging.level);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::ExitCode;

    fn set_args(format: Option<&str>, pretty: Option<bool>, level: Option<&str>) -> ConfigSetArgs {
        ConfigSetArgs {
            format: format.map(str::to_string),
            pretty,
            log_level: level.map(str::to_string),
        }
    }

    #[test]
    fn test_apply_all_options() {
        let mut config = Config::new();
        apply(&mut config, &set_args(Some("json"), Some(false), Some("DEBUG"))).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.pretty);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_apply_rejects_bad_values() {
        let mut config = Config::new();
        let err = apply(&mut config, &set_args(Some("yaml"), None, None)).unwrap_err();
        assert_eq!(err.kind, ExitCode::Validation);

        let err = apply(&mut config, &set_args(None, None, Some("loud"))).unwrap_err();
        assert!(err.message.contains("loud"));
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_set_requires_an_option() {
        let err = set_args(None, None, None).execute().unwrap_err();
        assert_eq!(err.kind, ExitCode::Validation);
    }
}
