//! CLI command handlers.
//!
//! Headless, scriptable access to the overview decoder for automation and
//! CI integration.

pub mod common;
pub mod config;
pub mod inspect;
pub mod presets;
pub mod validate;

pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use inspect::InspectArgs;
pub use presets::PresetsArgs;
pub use validate::ValidateArgs;
