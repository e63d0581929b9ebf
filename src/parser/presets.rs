//! Extraction of `presets` records.
//!
//! ```yaml
//! presets:
//! - - 'PvP'
//!   - - - alwaysShownStates
//!       - [15, 16]
//!     - - filteredStates
//!       - [11]
//!     - - groups
//!       - [25, 26, 27]
//! ```

use serde_yml::Value;

use crate::error::{OverviewError, Result};
use crate::models::{PresetGroupType, PresetGroups};
use crate::parser::raw::RawOverview;

/// Number of `[key, codes]` entries every preset carries.
const PRESET_GROUP_COUNT: usize = 3;

impl RawOverview {
    /// Extracts presets as `(raw name, groups)` pairs in document order.
    ///
    /// # Errors
    ///
    /// [`OverviewError::NoPreset`] when the section is empty, otherwise
    /// [`OverviewError::InvalidPreset`] for any malformed record.
    pub fn parse_presets(&self) -> Result<Vec<(String, PresetGroups)>> {
        if self.presets.is_empty() {
            return Err(OverviewError::NoPreset);
        }
        self.presets.iter().map(|record| parse_preset(record)).collect()
    }
}

fn parse_preset(record: &[Value]) -> Result<(String, PresetGroups)> {
    let [name, items] = record else {
        return Err(OverviewError::preset(format!(
            "expected [name, groups], found {} elements",
            record.len()
        )));
    };
    let name = name
        .as_str()
        .ok_or_else(|| OverviewError::preset(format!("name {name:?} is not a string")))?;
    let items = items
        .as_sequence()
        .ok_or_else(|| OverviewError::preset(format!("'{name}': groups are not a list")))?;
    if items.len() != PRESET_GROUP_COUNT {
        return Err(OverviewError::preset(format!(
            "'{name}': expected {PRESET_GROUP_COUNT} groups, found {}",
            items.len()
        )));
    }

    let mut groups = PresetGroups::default();
    for item in items {
        let (group, codes) = parse_group(name, item)?;
        *groups.list_mut(group) = codes;
    }

    Ok((name.to_string(), groups))
}

fn parse_group(name: &str, item: &Value) -> Result<(PresetGroupType, Vec<i64>)> {
    let Some([key, codes]) = item.as_sequence().map(Vec::as_slice) else {
        return Err(OverviewError::preset(format!(
            "'{name}': group entry {item:?} is not a [key, codes] pair"
        )));
    };
    let key = key
        .as_str()
        .ok_or_else(|| OverviewError::preset(format!("'{name}': group key {key:?} is not a string")))?;
    let group = PresetGroupType::from_key(key)
        .ok_or_else(|| OverviewError::preset(format!("'{name}': unknown group '{key}'")))?;

    let codes = match codes {
        Value::Null => Vec::new(),
        Value::Sequence(codes) => codes
            .iter()
            .map(|code| {
                code.as_i64().ok_or_else(|| {
                    OverviewError::preset(format!("'{name}': {key} code {code:?} is not an integer"))
                })
            })
            .collect::<Result<Vec<i64>>>()?,
        other => {
            return Err(OverviewError::preset(format!(
                "'{name}': {key} codes {other:?} are not a list"
            )))
        }
    };

    Ok((group, codes))
}
