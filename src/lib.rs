//! Overview SDK Library
//!
//! This library decodes EVE Online overview exports into validated, typed
//! settings: column layout, background and flag appearance rules, and
//! presets with tokenized rich-text names.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod parser;

pub use error::{ErrorKind, OverviewError, Result};
pub use models::Overview;
pub use parser::{parse_overview, parse_overview_file, parse_overview_str};
