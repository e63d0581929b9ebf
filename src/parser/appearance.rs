//! Assembly of background and flag rules.

use crate::error::{OverviewError, Result};
use crate::models::{
    AppearanceColor, AppearanceRule, AppearanceType, Category, UNKNOWN_APPEARANCE_CODE,
};
use crate::parser::categories::CategoryMap;
use crate::parser::raw::RawOverview;

/// Builds the rules for one category from its ordering and enabled lists.
///
/// Rules follow `order`, minus [`UNKNOWN_APPEARANCE_CODE`] entries. Missing
/// colors fall back to [`AppearanceColor::Default`] and missing blinks to
/// `false`.
///
/// # Errors
///
/// - [`OverviewError::InvalidAppearanceType`] for an unmapped state code
/// - [`OverviewError::InvalidColorName`] for an unknown color name
pub fn assemble_appearance(
    category: Category,
    order: &[u8],
    states: &[u8],
    colors: &CategoryMap<String>,
    blinks: &CategoryMap<bool>,
) -> Result<Vec<AppearanceRule>> {
    let mut rules = Vec::with_capacity(order.len());

    for &code in order {
        if code == UNKNOWN_APPEARANCE_CODE {
            continue;
        }

        let kind = AppearanceType::from_code(code)
            .ok_or(OverviewError::InvalidAppearanceType { category, code })?;

        let color = match colors.get(category, code) {
            Some(name) => AppearanceColor::from_name(name)
                .ok_or_else(|| OverviewError::InvalidColorName { name: name.clone() })?,
            None => AppearanceColor::Default,
        };

        rules.push(AppearanceRule {
            kind,
            color,
            blink: blinks.get(category, code).copied().unwrap_or(false),
            enabled: states.contains(&code),
        });
    }

    Ok(rules)
}

/// Builds background and flag rules from a raw overview.
///
/// Missing color or blink sections are treated as empty; a present but
/// malformed section is an error.
pub fn assemble_appearances(
    raw: &RawOverview,
) -> Result<(Vec<AppearanceRule>, Vec<AppearanceRule>)> {
    let colors = or_empty(raw.parse_colors())?;
    let blinks = or_empty(raw.parse_blinks())?;

    let backgrounds = assemble_appearance(
        Category::Background,
        &raw.background_order,
        &raw.background_states,
        &colors,
        &blinks,
    )?;
    let flags = assemble_appearance(
        Category::Flag,
        &raw.flag_order,
        &raw.flag_states,
        &colors,
        &blinks,
    )?;

    Ok((backgrounds, flags))
}

fn or_empty<T>(result: Result<CategoryMap<T>>) -> Result<CategoryMap<T>> {
    match result {
        Err(err) if err.is_absence() => Ok(CategoryMap::default()),
        other => other,
    }
}
