//! Decoded overview configuration.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{AppearanceRule, Column, ColumnRule, PresetGroups, PresetName};

/// Fully validated overview export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Overview {
    /// Background rules in display priority order
    pub backgrounds: Vec<AppearanceRule>,
    /// Flag rules in display priority order
    pub flags: Vec<AppearanceRule>,
    /// Columns in display order
    pub columns: Vec<ColumnRule>,
    /// Presets keyed by their tokenized name
    pub presets: BTreeMap<PresetName, PresetGroups>,
}

impl Overview {
    /// Visible columns, in display order.
    pub fn enabled_columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.columns
            .iter()
            .filter(|rule| rule.enabled)
            .map(|rule| rule.kind)
    }

    /// Finds a preset by raw markup or by display text.
    pub fn preset(&self, name: &str) -> Option<(&PresetName, &PresetGroups)> {
        self.presets
            .iter()
            .find(|(preset, _)| preset.raw() == name)
            .or_else(|| self.presets.iter().find(|(preset, _)| preset.text() == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> PresetName {
        PresetName::parse(raw).unwrap()
    }

    #[test]
    fn test_enabled_columns() {
        let overview = Overview {
            columns: vec![
                ColumnRule {
                    kind: Column::Icon,
                    enabled: true,
                },
                ColumnRule {
                    kind: Column::Tag,
                    enabled: false,
                },
                ColumnRule {
                    kind: Column::Name,
                    enabled: true,
                },
            ],
            ..Overview::default()
        };
        let enabled: Vec<Column> = overview.enabled_columns().collect();
        assert_eq!(enabled, vec![Column::Icon, Column::Name]);
    }

    #[test]
    fn test_preset_lookup() {
        let mut overview = Overview::default();
        overview.presets.insert(
            name("<color=red>PvP</color>"),
            PresetGroups {
                groups: vec![25],
                ..PresetGroups::default()
            },
        );

        let (found, groups) = overview.preset("PvP").unwrap();
        assert_eq!(found.raw(), "<color=red>PvP</color>");
        assert_eq!(groups.groups, vec![25]);
        assert!(overview.preset("<color=red>PvP</color>").is_some());
        assert!(overview.preset("Mining").is_none());
    }

    #[test]
    fn test_presets_serialize_by_raw_name() {
        let mut overview = Overview::default();
        overview
            .presets
            .insert(name("Mining"), PresetGroups::default());
        let json = serde_json::to_value(&overview).unwrap();
        assert!(json["presets"]["Mining"].is_object());
        assert!(json["presets"]["Mining"]["alwaysShownStates"].is_array());
    }
}
