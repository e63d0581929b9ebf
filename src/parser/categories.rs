//! Per-category extraction of `stateColorsNameList` and `stateBlinks`.
//!
//! Both sections are lists of `[key, value]` records where the key is a
//! category prefix followed by a state code, e.g. `background_9`.

use serde_yml::Value;
use std::collections::HashMap;

use crate::error::{OverviewError, Result};
use crate::models::Category;
use crate::parser::raw::RawOverview;

/// Values keyed by state code, split by category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMap<T> {
    background: HashMap<u8, T>,
    flag: HashMap<u8, T>,
}

impl<T> Default for CategoryMap<T> {
    fn default() -> Self {
        Self {
            background: HashMap::new(),
            flag: HashMap::new(),
        }
    }
}

impl<T> CategoryMap<T> {
    /// Value recorded for `code` in `category`.
    pub fn get(&self, category: Category, code: u8) -> Option<&T> {
        self.map(category).get(&code)
    }

    /// All values recorded for `category`.
    pub const fn map(&self, category: Category) -> &HashMap<u8, T> {
        match category {
            Category::Background => &self.background,
            Category::Flag => &self.flag,
        }
    }

    fn insert(&mut self, category: Category, code: u8, value: T) {
        match category {
            Category::Background => self.background.insert(code, value),
            Category::Flag => self.flag.insert(code, value),
        };
    }

    /// Total number of entries across both categories.
    pub fn len(&self) -> usize {
        self.background.len() + self.flag.len()
    }

    /// True when neither category has entries.
    pub fn is_empty(&self) -> bool {
        self.background.is_empty() && self.flag.is_empty()
    }
}

impl RawOverview {
    /// Extracts color names per category from `stateColorsNameList`.
    ///
    /// # Errors
    ///
    /// [`OverviewError::NoColor`] when the section is empty, otherwise
    /// [`OverviewError::InvalidColorRecord`] for any malformed record.
    pub fn parse_colors(&self) -> Result<CategoryMap<String>> {
        if self.state_colors_name_list.is_empty() {
            return Err(OverviewError::NoColor);
        }
        split_records(
            &self.state_colors_name_list,
            |value| value.as_str().map(str::to_string),
            OverviewError::color_record,
        )
    }

    /// Extracts blink states per category from `stateBlinks`.
    ///
    /// # Errors
    ///
    /// [`OverviewError::NoBlinks`] when the section is empty, otherwise
    /// [`OverviewError::InvalidBlinkRecord`] for any malformed record.
    pub fn parse_blinks(&self) -> Result<CategoryMap<bool>> {
        if self.state_blinks.is_empty() {
            return Err(OverviewError::NoBlinks);
        }
        split_records(
            &self.state_blinks,
            Value::as_bool,
            OverviewError::blink_record,
        )
    }
}

/// Splits `[key, value]` records into a [`CategoryMap`].
fn split_records<T>(
    records: &[Vec<Value>],
    value_of: impl Fn(&Value) -> Option<T>,
    invalid: fn(String) -> OverviewError,
) -> Result<CategoryMap<T>> {
    let mut map = CategoryMap::default();

    for record in records {
        let [key, value] = record.as_slice() else {
            return Err(invalid(format!(
                "expected 2 elements, found {}",
                record.len()
            )));
        };
        let key = key
            .as_str()
            .ok_or_else(|| invalid(format!("key {key:?} is not a string")))?;
        let value = value_of(value)
            .ok_or_else(|| invalid(format!("unexpected value {value:?} for '{key}'")))?;

        let (category, code) = parse_state_key(key).map_err(invalid)?;
        map.insert(category, code, value);
    }

    Ok(map)
}

/// Parses `background_<code>` / `flag_<code>` into its parts.
fn parse_state_key(key: &str) -> std::result::Result<(Category, u8), String> {
    let (category, code) = [Category::Background, Category::Flag]
        .into_iter()
        .find_map(|category| {
            key.strip_prefix(category.key_prefix())
                .map(|code| (category, code))
        })
        .ok_or_else(|| format!("'{key}' has no background_ or flag_ prefix"))?;

    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("'{key}': code is not a decimal number"));
    }
    let code = code
        .parse::<u8>()
        .map_err(|e| format!("'{key}': {e}"))?;
    Ok((category, code))
}
