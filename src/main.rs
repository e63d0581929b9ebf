//! Overview SDK - decode EVE Online overview exports from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use overviewsdk::cli::{CliResult, ConfigArgs, InspectArgs, PresetsArgs, ValidateArgs};
use overviewsdk::config::Config;
use overviewsdk::constants::{APP_BINARY_NAME, APP_NAME};
use overviewsdk::logging;

/// Overview SDK - inspect and validate overview YAML exports
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode an overview export and print its settings
    Inspect(InspectArgs),
    /// Validate an overview export
    Validate(ValidateArgs),
    /// List presets with their display names and colors
    Presets(PresetsArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: {e:#}. Using default configuration.");
        Config::default()
    });
    logging::init(cli.verbose, &config.logging.level);
    tracing::debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(&cli.command, &config) {
        eprintln!("Error: {err}");
        std::process::exit(err.kind.code());
    }

    Ok(())
}

fn run(command: &Command, config: &Config) -> CliResult<()> {
    match command {
        Command::Inspect(args) => args.execute(config),
        Command::Validate(args) => args.execute(config),
        Command::Presets(args) => args.execute(config),
        Command::Config(args) => args.execute(),
    }
}
