//! Appearance code tables and rules.
//!
//! The overview colors and blinks entities by their standing or status. Each
//! state has a numeric code in the export, and the same table serves both the
//! background and the flag category.

use serde::Serialize;
use std::fmt;

/// Code the client writes for states it no longer knows about.
///
/// Entries with this code are skipped, never resolved.
pub const UNKNOWN_APPEARANCE_CODE: u8 = 20;

/// Appearance domain a code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Row background highlight
    Background,
    /// Icon flag
    Flag,
}

impl Category {
    /// Prefix used for this category in `stateBlinks` / `stateColorsNameList` keys.
    pub const fn key_prefix(self) -> &'static str {
        match self {
            Self::Background => "background_",
            Self::Flag => "flag_",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Background => write!(f, "background"),
            Self::Flag => write!(f, "flag"),
        }
    }
}

/// Entity state that can carry a background or flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AppearanceType {
    /// Pilot with low security status
    LowSecurityStatus,
    /// Outlaw pilot
    Pirate,
    /// Fleet member
    Fleet,
    /// Member of the player's corporation
    PlayerCorporation,
    /// Corporation at war
    CorporationWar,
    /// Member of the player's alliance
    Alliance,
    /// Standing +10
    ExcellentStanding,
    /// Standing +5
    GoodStanding,
    /// Standing 0
    NeutralStanding,
    /// Standing -5
    BadStanding,
    /// Standing -10
    TerribleStanding,
    /// Mission agent
    Agent,
    /// Factional warfare ally
    Militia,
    /// Factional warfare enemy
    MilitiaWar,
    /// No standing set
    NoStanding,
    /// War ally
    AllyWar,
    /// Suspect timer
    Suspect,
    /// Criminal timer
    Criminal,
    /// Limited engagement
    LimitedEngagement,
    /// Kill right available
    KillRight,
    /// NPC corporation member
    NpcCorporation,
}

impl AppearanceType {
    /// Every state, in table order.
    pub const ALL: [Self; 21] = [
        Self::LowSecurityStatus,
        Self::Pirate,
        Self::Fleet,
        Self::PlayerCorporation,
        Self::CorporationWar,
        Self::Alliance,
        Self::ExcellentStanding,
        Self::GoodStanding,
        Self::NeutralStanding,
        Self::BadStanding,
        Self::TerribleStanding,
        Self::Agent,
        Self::Militia,
        Self::MilitiaWar,
        Self::NoStanding,
        Self::AllyWar,
        Self::Suspect,
        Self::Criminal,
        Self::LimitedEngagement,
        Self::KillRight,
        Self::NpcCorporation,
    ];

    /// Numeric code used in the export.
    pub const fn code(self) -> u8 {
        match self {
            Self::LowSecurityStatus => 9,
            Self::Pirate => 10,
            Self::Fleet => 11,
            Self::PlayerCorporation => 12,
            Self::CorporationWar => 13,
            Self::Alliance => 14,
            Self::ExcellentStanding => 15,
            Self::GoodStanding => 16,
            Self::NeutralStanding => 17,
            Self::BadStanding => 18,
            Self::TerribleStanding => 19,
            Self::Agent => 21,
            Self::Militia => 45,
            Self::MilitiaWar => 44,
            Self::NoStanding => 48,
            Self::AllyWar => 49,
            Self::Suspect => 50,
            Self::Criminal => 51,
            Self::LimitedEngagement => 52,
            Self::KillRight => 53,
            Self::NpcCorporation => 66,
        }
    }

    /// Looks up a state by its numeric code.
    ///
    /// Returns `None` for unmapped codes, including [`UNKNOWN_APPEARANCE_CODE`].
    pub const fn from_code(code: u8) -> Option<Self> {
        let kind = match code {
            9 => Self::LowSecurityStatus,
            10 => Self::Pirate,
            11 => Self::Fleet,
            12 => Self::PlayerCorporation,
            13 => Self::CorporationWar,
            14 => Self::Alliance,
            15 => Self::ExcellentStanding,
            16 => Self::GoodStanding,
            17 => Self::NeutralStanding,
            18 => Self::BadStanding,
            19 => Self::TerribleStanding,
            21 => Self::Agent,
            45 => Self::Militia,
            44 => Self::MilitiaWar,
            48 => Self::NoStanding,
            49 => Self::AllyWar,
            50 => Self::Suspect,
            51 => Self::Criminal,
            52 => Self::LimitedEngagement,
            53 => Self::KillRight,
            66 => Self::NpcCorporation,
            _ => return None,
        };
        Some(kind)
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::LowSecurityStatus => "Low Security Status",
            Self::Pirate => "Pirate",
            Self::Fleet => "Fleet",
            Self::PlayerCorporation => "Player Corporation",
            Self::CorporationWar => "Corporation War",
            Self::Alliance => "Alliance",
            Self::ExcellentStanding => "Excellent Standing",
            Self::GoodStanding => "Good Standing",
            Self::NeutralStanding => "Neutral Standing",
            Self::BadStanding => "Bad Standing",
            Self::TerribleStanding => "Terrible Standing",
            Self::Agent => "Agent",
            Self::Militia => "Militia",
            Self::MilitiaWar => "Militia War",
            Self::NoStanding => "No Standing",
            Self::AllyWar => "Ally War",
            Self::Suspect => "Suspect",
            Self::Criminal => "Criminal",
            Self::LimitedEngagement => "Limited Engagement",
            Self::KillRight => "Kill Right",
            Self::NpcCorporation => "NPC Corporation",
        }
    }
}

impl fmt::Display for AppearanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Palette available for backgrounds and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum AppearanceColor {
    /// white
    White,
    /// purple
    Purple,
    /// orange
    Orange,
    /// blue
    Blue,
    /// turquoise
    Turquoise,
    /// darkBlue
    DarkBlue,
    /// green
    Green,
    /// yellow
    Yellow,
    /// darkTurquoise
    DarkTurquoise,
    /// red
    Red,
    /// indigo
    Indigo,
    /// Client default for the state
    #[default]
    Default,
}

impl AppearanceColor {
    /// Every color, in table order.
    pub const ALL: [Self; 12] = [
        Self::White,
        Self::Purple,
        Self::Orange,
        Self::Blue,
        Self::Turquoise,
        Self::DarkBlue,
        Self::Green,
        Self::Yellow,
        Self::DarkTurquoise,
        Self::Red,
        Self::Indigo,
        Self::Default,
    ];

    /// Name used in `stateColorsNameList`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Blue => "blue",
            Self::Turquoise => "turquoise",
            Self::DarkBlue => "darkBlue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::DarkTurquoise => "darkTurquoise",
            Self::Red => "red",
            Self::Indigo => "indigo",
            Self::Default => "default",
        }
    }

    /// Looks up a color by its export name (case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.as_str() == name)
    }

    /// True for the fallback color.
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }
}

impl fmt::Display for AppearanceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved background or flag setting for one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AppearanceRule {
    /// State the rule applies to
    pub kind: AppearanceType,
    /// Assigned color
    pub color: AppearanceColor,
    /// Whether the highlight blinks
    pub blink: bool,
    /// Whether the rule is active
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for kind in AppearanceType::ALL {
            assert_eq!(AppearanceType::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<u8> = AppearanceType::ALL.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), AppearanceType::ALL.len());
    }

    #[test]
    fn test_unknown_code_is_unmapped() {
        assert_eq!(AppearanceType::from_code(UNKNOWN_APPEARANCE_CODE), None);
        assert_eq!(AppearanceType::from_code(0), None);
        assert_eq!(AppearanceType::from_code(255), None);
    }

    #[test]
    fn test_militia_codes() {
        // 44 and 45 are listed out of order in the client
        assert_eq!(AppearanceType::from_code(44), Some(AppearanceType::MilitiaWar));
        assert_eq!(AppearanceType::from_code(45), Some(AppearanceType::Militia));
    }

    #[test]
    fn test_color_names() {
        for color in AppearanceColor::ALL {
            assert_eq!(AppearanceColor::from_name(color.as_str()), Some(color));
        }
        assert_eq!(AppearanceColor::from_name("darkblue"), None);
        assert_eq!(AppearanceColor::from_name("Red"), None);
        assert!(AppearanceColor::default().is_default());
        assert!(!AppearanceColor::Red.is_default());
    }

    #[test]
    fn test_category_prefix() {
        assert_eq!(Category::Background.key_prefix(), "background_");
        assert_eq!(Category::Flag.key_prefix(), "flag_");
        assert_eq!(Category::Flag.to_string(), "flag");
    }
}
