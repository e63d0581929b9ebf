//! Error types for overview decoding.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::Category;

/// Errors that can occur while decoding an overview export.
#[derive(Debug, Error)]
pub enum OverviewError {
    // === Structural Errors ===
    /// The document does not match the expected loose schema.
    #[error("failed to decode overview document: {0}")]
    Decode(#[from] serde_yml::Error),

    /// Failed to read the overview file.
    #[error("failed to read overview file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Absent Sections ===
    /// `stateColorsNameList` is missing or empty.
    #[error("no color found")]
    NoColor,

    /// `stateBlinks` is missing or empty.
    #[error("no blink state found")]
    NoBlinks,

    /// `presets` is missing or empty.
    #[error("no preset found")]
    NoPreset,

    // === Unknown Codes ===
    /// A background or flag code that is not in the appearance table.
    #[error("{code} is not a valid {category} code")]
    InvalidAppearanceType { category: Category, code: u8 },

    /// A color name that is not in the appearance color table.
    #[error("'{name}' is not a valid color")]
    InvalidColorName { name: String },

    /// A column name that is not in the column table.
    #[error("'{column}' is not a valid column code")]
    InvalidColumn { column: String },

    // === Malformed Records ===
    /// Malformed `stateColorsNameList` record.
    #[error("invalid color record: {reason}")]
    InvalidColorRecord { reason: String },

    /// Malformed `stateBlinks` record.
    #[error("invalid blink state: {reason}")]
    InvalidBlinkRecord { reason: String },

    /// Malformed `presets` record.
    #[error("invalid preset: {reason}")]
    InvalidPreset { reason: String },

    /// A `color=` directive without a value.
    #[error("invalid color tag '{tag}'")]
    InvalidColorTag { tag: String },

    /// A color that is neither a known name nor valid hex.
    #[error("invalid hex format '{value}'")]
    InvalidHexFormat { value: String },

    /// Preset name markup that cannot be tokenized.
    #[error("malformed markup at byte {offset}: {reason}")]
    Markup { offset: usize, reason: String },
}

/// Coarse classification of [`OverviewError`] for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input could not be read or decoded at all
    Decode,
    /// An optional section is missing; callers may substitute defaults
    Absent,
    /// A code that does not exist in its table
    InvalidCode,
    /// Malformed sub-structure inside an otherwise decodable record
    InvalidFormat,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode => write!(f, "decode"),
            Self::Absent => write!(f, "absent"),
            Self::InvalidCode => write!(f, "invalid-code"),
            Self::InvalidFormat => write!(f, "invalid-format"),
        }
    }
}

impl OverviewError {
    /// Returns the classification of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Decode(_) | Self::Read { .. } => ErrorKind::Decode,
            Self::NoColor | Self::NoBlinks | Self::NoPreset => ErrorKind::Absent,
            Self::InvalidAppearanceType { .. }
            | Self::InvalidColorName { .. }
            | Self::InvalidColumn { .. } => ErrorKind::InvalidCode,
            Self::InvalidColorRecord { .. }
            | Self::InvalidBlinkRecord { .. }
            | Self::InvalidPreset { .. }
            | Self::InvalidColorTag { .. }
            | Self::InvalidHexFormat { .. }
            | Self::Markup { .. } => ErrorKind::InvalidFormat,
        }
    }

    /// True when the error only signals a missing optional section.
    pub const fn is_absence(&self) -> bool {
        matches!(self.kind(), ErrorKind::Absent)
    }

    pub(crate) fn color_record(reason: impl Into<String>) -> Self {
        Self::InvalidColorRecord {
            reason: reason.into(),
        }
    }

    pub(crate) fn blink_record(reason: impl Into<String>) -> Self {
        Self::InvalidBlinkRecord {
            reason: reason.into(),
        }
    }

    pub(crate) fn preset(reason: impl Into<String>) -> Self {
        Self::InvalidPreset {
            reason: reason.into(),
        }
    }

    pub(crate) fn hex_format(value: impl Into<String>) -> Self {
        Self::InvalidHexFormat {
            value: value.into(),
        }
    }
}

/// Result type for overview decoding.
pub type Result<T> = std::result::Result<T, OverviewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OverviewError::InvalidColumn {
            column: "BOGUS".to_string(),
        };
        assert_eq!(err.to_string(), "'BOGUS' is not a valid column code");

        let err = OverviewError::InvalidAppearanceType {
            category: Category::Flag,
            code: 99,
        };
        assert_eq!(err.to_string(), "99 is not a valid flag code");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(OverviewError::NoColor.kind(), ErrorKind::Absent);
        assert!(OverviewError::NoBlinks.is_absence());
        assert!(OverviewError::NoPreset.is_absence());
        assert_eq!(
            OverviewError::hex_format("#12").kind(),
            ErrorKind::InvalidFormat
        );
        assert_eq!(
            OverviewError::InvalidColorName {
                name: "pink".to_string()
            }
            .kind(),
            ErrorKind::InvalidCode
        );
        assert!(!OverviewError::preset("arity").is_absence());
    }

    #[test]
    fn test_error_from_yaml() {
        let yaml_err = serde_yml::from_str::<Vec<u8>>("not: [a list").unwrap_err();
        let err: OverviewError = yaml_err.into();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }
}
