//! Presets command: list preset names as the client renders them.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{load_overview, print_json, wants_json, CliResult};
use crate::config::Config;

/// List presets with their tokenized names
#[derive(Debug, Clone, Args)]
pub struct PresetsArgs {
    /// Path to overview YAML export
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PresetEntry<'a> {
    raw: &'a str,
    text: &'a str,
    indent: usize,
    color: String,
    always_shown_states: &'a [i64],
    filtered_states: &'a [i64],
    groups: &'a [i64],
}

impl PresetsArgs {
    /// Execute the presets command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let overview = load_overview(&self.file)?;

        let entries: Vec<PresetEntry> = overview
            .presets
            .iter()
            .map(|(name, groups)| PresetEntry {
                raw: name.raw(),
                text: name.text(),
                indent: name.indent(),
                color: name.hex_color(),
                always_shown_states: &groups.always_shown_states,
                filtered_states: &groups.filtered_states,
                groups: &groups.groups,
            })
            .collect();

        if wants_json(self.json, config) {
            return print_json(&entries, config.output.pretty);
        }

        if entries.is_empty() {
            println!("No presets found");
            return Ok(());
        }
        for entry in &entries {
            let color = if entry.color.is_empty() {
                "-"
            } else {
                entry.color.as_str()
            };
            println!(
                "{:<10} {:indent$}{}",
                color,
                "",
                entry.text,
                indent = entry.indent
            );
        }
        Ok(())
    }
}
