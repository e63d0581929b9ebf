//! Decoding of overview exports.
//!
//! Decoding runs in stages: the YAML document is read into a loosely-typed
//! [`RawOverview`], the positional record sections are split per category,
//! and the assemblers resolve every code against the tables in
//! [`crate::models`].

pub mod appearance;
pub mod categories;
pub mod columns;
pub mod markup;
pub mod overview;
pub mod presets;
pub mod raw;

// Re-export commonly used functions
pub use categories::CategoryMap;
pub use overview::{build_overview, parse_overview, parse_overview_file, parse_overview_str};
pub use raw::RawOverview;
