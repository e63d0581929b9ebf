//! Top-level overview decoding.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use crate::error::{OverviewError, Result};
use crate::models::{Overview, PresetName};
use crate::parser::appearance::assemble_appearances;
use crate::parser::columns::assemble_columns;
use crate::parser::raw::RawOverview;

/// Decodes and validates an overview export from a YAML stream.
///
/// # Errors
///
/// Any structural, code or format error aborts decoding. Missing color,
/// blink and preset sections are not errors.
pub fn parse_overview<R: Read>(reader: R) -> Result<Overview> {
    build_overview(&RawOverview::from_reader(reader)?)
}

/// Decodes and validates an overview export from a YAML string.
///
/// # Examples
///
/// ```
/// use overviewsdk::models::AppearanceType;
///
/// let overview = overviewsdk::parse_overview_str("backgroundOrder: [9, 20, 51]").unwrap();
/// assert_eq!(overview.backgrounds.len(), 2);
/// assert_eq!(overview.backgrounds[1].kind, AppearanceType::Criminal);
/// ```
pub fn parse_overview_str(content: &str) -> Result<Overview> {
    build_overview(&RawOverview::from_str(content)?)
}

/// Reads and decodes an overview export file.
pub fn parse_overview_file(path: &Path) -> Result<Overview> {
    tracing::debug!(path = %path.display(), "reading overview export");
    let file = std::fs::File::open(path).map_err(|source| OverviewError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let overview = parse_overview(std::io::BufReader::new(file));
    match &overview {
        Ok(overview) => tracing::debug!(
            backgrounds = overview.backgrounds.len(),
            flags = overview.flags.len(),
            columns = overview.columns.len(),
            presets = overview.presets.len(),
            "decoded overview"
        ),
        Err(err) => tracing::debug!(kind = %err.kind(), "overview rejected: {err}"),
    }
    overview
}

/// Assembles the typed overview from a decoded raw document.
pub fn build_overview(raw: &RawOverview) -> Result<Overview> {
    let (backgrounds, flags) = assemble_appearances(raw)?;
    let columns = assemble_columns(raw)?;

    let presets = match raw.parse_presets() {
        Ok(presets) => presets
            .into_iter()
            .map(|(name, groups)| Ok((PresetName::parse(&name)?, groups)))
            .collect::<Result<BTreeMap<_, _>>>()?,
        Err(err) if err.is_absence() => BTreeMap::new(),
        Err(err) => return Err(err),
    };

    Ok(Overview {
        backgrounds,
        flags,
        columns,
        presets,
    })
}
