//! Inspect command: print a decoded overview.

use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{load_overview, print_json, wants_json, CliResult};
use crate::config::Config;
use crate::models::{AppearanceRule, Overview};

/// Section of the overview to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    /// Background rules
    Backgrounds,
    /// Flag rules
    Flags,
    /// Column layout
    Columns,
    /// Presets
    Presets,
}

/// Decode an overview export and print its settings
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to overview YAML export
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Only print one section
    #[arg(long, value_enum)]
    pub section: Option<Section>,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let overview = load_overview(&self.file)?;

        if wants_json(self.json, config) {
            return self.print_json(&overview, config.output.pretty);
        }

        let show = |section: Section| self.section.is_none() || self.section == Some(section);
        if show(Section::Backgrounds) {
            print_rules("Backgrounds", &overview.backgrounds);
        }
        if show(Section::Flags) {
            print_rules("Flags", &overview.flags);
        }
        if show(Section::Columns) {
            println!("Columns:");
            for column in &overview.columns {
                println!("  [{}] {}", mark(column.enabled), column.kind);
            }
        }
        if show(Section::Presets) {
            println!("Presets:");
            for (name, groups) in &overview.presets {
                println!(
                    "  {} (shown: {}, filtered: {}, groups: {})",
                    name,
                    groups.always_shown_states.len(),
                    groups.filtered_states.len(),
                    groups.groups.len()
                );
            }
        }

        Ok(())
    }

    fn print_json(&self, overview: &Overview, pretty: bool) -> CliResult<()> {
        match self.section {
            None => print_json(overview, pretty),
            Some(Section::Backgrounds) => print_json(&overview.backgrounds, pretty),
            Some(Section::Flags) => print_json(&overview.flags, pretty),
            Some(Section::Columns) => print_json(&overview.columns, pretty),
            Some(Section::Presets) => print_json(&overview.presets, pretty),
        }
    }
}

fn print_rules(title: &str, rules: &[AppearanceRule]) {
    println!("{title}:");
    for rule in rules {
        let blink = if rule.blink { " (blink)" } else { "" };
        println!(
            "  [{}] {:<20} {}{}",
            mark(rule.enabled),
            rule.kind.label(),
            rule.color,
            blink
        );
    }
}

const fn mark(enabled: bool) -> char {
    if enabled {
        'x'
    } else {
        ' '
    }
}

/// Summary counts, used by the JSON output of `validate`.
#[derive(Debug, Clone, Serialize)]
pub struct OverviewSummary {
    /// Number of background rules
    pub backgrounds: usize,
    /// Number of flag rules
    pub flags: usize,
    /// Number of columns
    pub columns: usize,
    /// Number of visible columns
    pub enabled_columns: usize,
    /// Number of presets
    pub presets: usize,
}

impl From<&Overview> for OverviewSummary {
    fn from(overview: &Overview) -> Self {
        Self {
            backgrounds: overview.backgrounds.len(),
            flags: overview.flags.len(),
            columns: overview.columns.len(),
            enabled_columns: overview.enabled_columns().count(),
            presets: overview.presets.len(),
        }
    }
}
