//! Stable exit codes for pickles CLI commands.

/// Command succeeded and no verdict failed.
pub const OK: i32 = 0;
/// Command failed due to invalid config, document, or report.
pub const INVALID: i32 = 1;
/// `pickles results` found at least one failed verdict.
pub const FAILED: i32 = 2;
