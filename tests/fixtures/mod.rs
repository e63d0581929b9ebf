//! Shared test fixtures for overview decoding and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A complete export with every section populated.
pub const FULL_EXPORT: &str = r"
backgroundOrder: [9, 20, 51, 44]
backgroundStates: [9, 44]
columnOrder: [ICON, NAME, DISTANCE, TYPE, VELOCITY]
flagOrder: [51, 50, 20, 9]
flagStates: [51, 50]
overviewColumns: [ICON, NAME, DISTANCE]
stateBlinks:
- [background_44, true]
- [flag_51, true]
- [flag_50, false]
stateColorsNameList:
- [background_44, orange]
- [flag_51, red]
- [flag_50, yellow]
presets:
- - '  <color=0xffff0000>Hostiles</color>'
  - - [alwaysShownStates, [51, 50]]
    - [filteredStates, [9]]
    - [groups, [25, 26, 27]]
- - '<color=teal>Mining</color>'
  - - [alwaysShownStates, null]
    - [filteredStates, []]
    - [groups, [450, 451]]
";

/// Minimal export without color, blink or preset sections.
pub const BARE_EXPORT: &str = r"
backgroundOrder: [9, 20, 51]
backgroundStates: [9]
columnOrder: [ICON, NAME]
overviewColumns: [NAME]
";

/// Builds an export with the given column order and no other sections.
pub fn columns_export(columns: &[&str]) -> String {
    format!("columnOrder: [{}]\n", columns.join(", "))
}

/// Writes `content` to `overview.yaml` inside a fresh temp directory.
///
/// The returned `TempDir` must stay alive for as long as the file is used.
pub fn write_temp_overview(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("overview.yaml");
    fs::write(&path, content).expect("Failed to write overview file");
    (path, temp_dir)
}

/// Path to the overviewsdk binary.
pub fn overviewsdk_bin() -> &'static str {
    env!("CARGO_BIN_EXE_overviewsdk")
}

/// Command for the binary with an isolated, empty config directory.
pub fn overviewsdk(config_home: &Path) -> Command {
    let mut command = Command::new(overviewsdk_bin());
    command
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("RUST_LOG");
    command
}
