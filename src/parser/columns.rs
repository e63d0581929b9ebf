//! Assembly of column rules.

use crate::error::{OverviewError, Result};
use crate::models::{Column, ColumnRule};
use crate::parser::raw::RawOverview;

/// Builds column rules in `columnOrder` order.
///
/// A column is enabled when its canonical name appears in `overviewColumns`.
///
/// # Errors
///
/// [`OverviewError::InvalidColumn`] for a name that is not in the column table.
pub fn assemble_columns(raw: &RawOverview) -> Result<Vec<ColumnRule>> {
    raw.column_order
        .iter()
        .map(|name| {
            let kind = Column::from_name(name).ok_or_else(|| OverviewError::InvalidColumn {
                column: name.clone(),
            })?;
            Ok(ColumnRule {
                kind,
                enabled: raw.overview_columns.iter().any(|c| c == kind.as_str()),
            })
        })
        .collect()
}
