//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Overview SDK";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "overviewsdk";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "OverviewSdk";
