//! Data models for decoded overview settings.
//!
//! This module contains the code tables (appearance states, colors, columns,
//! named markup colors) and the typed records built from them. Models are
//! independent of the YAML layout they are decoded from.

pub mod appearance;
pub mod column;
pub mod overview;
pub mod preset;
pub mod rgb;

// Re-export all model types
pub use appearance::{
    AppearanceColor, AppearanceRule, AppearanceType, Category, UNKNOWN_APPEARANCE_CODE,
};
pub use column::{Column, ColumnRule};
pub use overview::Overview;
pub use preset::{NamedColor, PresetGroupType, PresetGroups, PresetName};
pub use rgb::RgbColor;
