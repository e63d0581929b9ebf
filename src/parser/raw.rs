//! Raw overview document as exported by the client.
//!
//! Fields mirror the YAML keys. Positional records (`stateBlinks`,
//! `stateColorsNameList`, `presets`) are kept as untyped values here and
//! checked element by element by the extractors.

use serde::{Deserialize, Deserializer};
use serde_yml::Value;
use std::io::Read;

use crate::error::Result;

/// Loosely-typed overview export.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawOverview {
    /// Background state codes in priority order
    #[serde(deserialize_with = "null_as_default")]
    pub background_order: Vec<u8>,
    /// Enabled background state codes
    #[serde(deserialize_with = "null_as_default")]
    pub background_states: Vec<u8>,
    /// Column names in display order
    #[serde(deserialize_with = "null_as_default")]
    pub column_order: Vec<String>,
    /// Flag state codes in priority order
    #[serde(deserialize_with = "null_as_default")]
    pub flag_order: Vec<u8>,
    /// Enabled flag state codes
    #[serde(deserialize_with = "null_as_default")]
    pub flag_states: Vec<u8>,
    /// Enabled column names
    #[serde(deserialize_with = "null_as_default")]
    pub overview_columns: Vec<String>,
    /// `[key, bool]` records
    #[serde(deserialize_with = "null_as_default")]
    pub state_blinks: Vec<Vec<Value>>,
    /// `[key, color name]` records
    #[serde(deserialize_with = "null_as_default")]
    pub state_colors_name_list: Vec<Vec<Value>>,
    /// `[name, [[group key, codes] x3]]` records
    #[serde(deserialize_with = "null_as_default")]
    pub presets: Vec<Vec<Value>>,
}

impl RawOverview {
    /// Decodes a raw overview from a YAML stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_yml::from_reader(reader)?)
    }

    /// Decodes a raw overview from a YAML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(serde_yml::from_str(content)?)
    }
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
