//! Preset models: state/group lists and rich-text names.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::Result;
use crate::models::RgbColor;

/// HTML color names accepted in preset name markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    /// white
    White,
    /// silver
    Silver,
    /// gray
    Gray,
    /// black
    Black,
    /// red
    Red,
    /// maroon
    Maroon,
    /// yellow
    Yellow,
    /// olive
    Olive,
    /// lime
    Lime,
    /// green
    Green,
    /// aqua
    Aqua,
    /// teal
    Teal,
    /// blue
    Blue,
    /// navy
    Navy,
    /// fuchsia
    Fuchsia,
    /// purple
    Purple,
}

impl NamedColor {
    /// Every named color, in table order.
    pub const ALL: [Self; 16] = [
        Self::White,
        Self::Silver,
        Self::Gray,
        Self::Black,
        Self::Red,
        Self::Maroon,
        Self::Yellow,
        Self::Olive,
        Self::Lime,
        Self::Green,
        Self::Aqua,
        Self::Teal,
        Self::Blue,
        Self::Navy,
        Self::Fuchsia,
        Self::Purple,
    ];

    /// Name as written in markup.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Silver => "silver",
            Self::Gray => "gray",
            Self::Black => "black",
            Self::Red => "red",
            Self::Maroon => "maroon",
            Self::Yellow => "yellow",
            Self::Olive => "olive",
            Self::Lime => "lime",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Teal => "teal",
            Self::Blue => "blue",
            Self::Navy => "navy",
            Self::Fuchsia => "fuchsia",
            Self::Purple => "purple",
        }
    }

    /// Looks up a color by exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.as_str() == name)
    }

    /// Standard HTML value of the color.
    pub const fn rgb(self) -> RgbColor {
        match self {
            Self::White => RgbColor::new(255, 255, 255),
            Self::Silver => RgbColor::new(192, 192, 192),
            Self::Gray => RgbColor::new(128, 128, 128),
            Self::Black => RgbColor::new(0, 0, 0),
            Self::Red => RgbColor::new(255, 0, 0),
            Self::Maroon => RgbColor::new(128, 0, 0),
            Self::Yellow => RgbColor::new(255, 255, 0),
            Self::Olive => RgbColor::new(128, 128, 0),
            Self::Lime => RgbColor::new(0, 255, 0),
            Self::Green => RgbColor::new(0, 128, 0),
            Self::Aqua => RgbColor::new(0, 255, 255),
            Self::Teal => RgbColor::new(0, 128, 128),
            Self::Blue => RgbColor::new(0, 0, 255),
            Self::Navy => RgbColor::new(0, 0, 128),
            Self::Fuchsia => RgbColor::new(255, 0, 255),
            Self::Purple => RgbColor::new(128, 0, 128),
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inner list key of a preset record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetGroupType {
    /// States shown regardless of the filter
    AlwaysShownStates,
    /// States hidden by the filter
    FilteredStates,
    /// Inventory group ids included by the preset
    Groups,
}

impl PresetGroupType {
    /// Key used in the export.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlwaysShownStates => "alwaysShownStates",
            Self::FilteredStates => "filteredStates",
            Self::Groups => "groups",
        }
    }

    /// Looks up a group type by its export key.
    pub fn from_key(key: &str) -> Option<Self> {
        [Self::AlwaysShownStates, Self::FilteredStates, Self::Groups]
            .into_iter()
            .find(|group| group.as_str() == key)
    }
}

/// The three code lists of a preset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetGroups {
    /// States always shown
    pub always_shown_states: Vec<i64>,
    /// States filtered out
    pub filtered_states: Vec<i64>,
    /// Group ids shown
    pub groups: Vec<i64>,
}

impl PresetGroups {
    /// Mutable access to the list stored under `group`.
    pub fn list_mut(&mut self, group: PresetGroupType) -> &mut Vec<i64> {
        match group {
            PresetGroupType::AlwaysShownStates => &mut self.always_shown_states,
            PresetGroupType::FilteredStates => &mut self.filtered_states,
            PresetGroupType::Groups => &mut self.groups,
        }
    }
}

/// Preset display name split into text, color and indentation.
///
/// Ordering and equality follow the raw string, since every other field is
/// derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PresetName {
    pub(crate) raw: String,
    pub(crate) text: String,
    pub(crate) color: Option<RgbColor>,
    pub(crate) indent: usize,
}

impl PresetName {
    /// Tokenizes a preset display name.
    ///
    /// ```
    /// use overviewsdk::models::PresetName;
    ///
    /// let name = PresetName::parse("  <color=0xffff0000>Hostiles</color>").unwrap();
    /// assert_eq!(name.text(), "Hostiles");
    /// assert_eq!(name.indent(), 2);
    /// assert_eq!(name.hex_color(), "0xffff0000");
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        crate::parser::markup::parse_preset_name(raw)
    }

    /// Original markup string.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Display text without markup or leading indentation.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Color set by markup, if any.
    pub const fn color(&self) -> Option<RgbColor> {
        self.color
    }

    /// True when the markup carried a color.
    pub const fn has_color(&self) -> bool {
        self.color.is_some()
    }

    /// Number of leading spaces before the display text.
    pub const fn indent(&self) -> usize {
        self.indent
    }

    /// Color as `0xffrrggbb`, or an empty string without a color.
    pub fn hex_color(&self) -> String {
        self.color.map(|c| c.to_argb_hex()).unwrap_or_default()
    }
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.text, indent = self.indent)
    }
}

impl Serialize for PresetName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}
