//! Stable exit codes for actiongen CLI commands.

/// Command succeeded; for `check`, the generated file is up to date.
pub const OK: i32 = 0;
/// Command failed due to invalid config, manifest, module set or other errors.
pub const INVALID: i32 = 1;
/// `actiongen check` found the generated file missing or out of date.
pub const STALE: i32 = 2;
