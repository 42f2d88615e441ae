//! Exit code constants for the pingpong CLI.
//!
//! - 0: Success (including runs where individual topics were skipped)
//! - 1: User error (bad config, bad topics file, invalid flags)
//! - 2: Validation failure (malformed topic data or a broken stage template)
//! - 3: Output failure (directory or file could not be written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: unreadable or invalid configuration or input files.
pub const USER_ERROR: i32 = 1;

/// Validation failure: topic data or template rendering rejected.
pub const VALIDATION_FAILURE: i32 = 2;

/// Output failure: the content directory or a file in it could not be written.
pub const IO_FAILURE: i32 = 3;
