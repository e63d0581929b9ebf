//! Overview column table.

use serde::Serialize;
use std::fmt;

/// Column that can be shown in the overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Column {
    /// ICON
    Icon,
    /// DISTANCE
    Distance,
    /// NAME
    Name,
    /// TYPE
    Type,
    /// TAG
    Tag,
    /// CORPORATION
    Corporation,
    /// ALLIANCE
    Alliance,
    /// FACTION
    Faction,
    /// MILITIA
    Militia,
    /// SIZE
    Size,
    /// VELOCITY
    Velocity,
    /// RADIALVELOCITY
    RadialVelocity,
    /// TRANSVERSALVELOCITY
    TransversalVelocity,
    /// ANGULARVELOCITY
    AngularVelocity,
}

impl Column {
    /// Every column, in table order.
    pub const ALL: [Self; 14] = [
        Self::Icon,
        Self::Distance,
        Self::Name,
        Self::Type,
        Self::Tag,
        Self::Corporation,
        Self::Alliance,
        Self::Faction,
        Self::Militia,
        Self::Size,
        Self::Velocity,
        Self::RadialVelocity,
        Self::TransversalVelocity,
        Self::AngularVelocity,
    ];

    /// Canonical name as written in `columnOrder` and `overviewColumns`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Icon => "ICON",
            Self::Distance => "DISTANCE",
            Self::Name => "NAME",
            Self::Type => "TYPE",
            Self::Tag => "TAG",
            Self::Corporation => "CORPORATION",
            Self::Alliance => "ALLIANCE",
            Self::Faction => "FACTION",
            Self::Militia => "MILITIA",
            Self::Size => "SIZE",
            Self::Velocity => "VELOCITY",
            Self::RadialVelocity => "RADIALVELOCITY",
            Self::TransversalVelocity => "TRANSVERSALVELOCITY",
            Self::AngularVelocity => "ANGULARVELOCITY",
        }
    }

    /// Looks up a column by exact canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.as_str() == name)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Column position entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColumnRule {
    /// Column shown at this position
    pub kind: Column,
    /// Whether the column is visible
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for column in Column::ALL {
            assert_eq!(Column::from_name(column.as_str()), Some(column));
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(Column::from_name("icon"), None);
        assert_eq!(Column::from_name(" ICON"), None);
        assert_eq!(Column::from_name("BOGUS"), None);
    }

    #[test]
    fn test_serialize_uses_canonical_name() {
        let json = serde_json::to_string(&Column::RadialVelocity).unwrap();
        assert_eq!(json, "\"RADIALVELOCITY\"");
        assert_eq!(Column::RadialVelocity.to_string(), "RADIALVELOCITY");
    }
}
