//! Exit code constants for CLI commands
//!
//! - 0: Success
//! - 1: A tool call failed or the server stopped on a fatal error
//! - 2: Invalid command-line input (bad JSON, unknown tool, invalid arguments)

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Tool failure or fatal server error
pub const EXIT_WARNING: i32 = 1;

/// Invalid command-line input
pub const EXIT_ERROR: i32 = 2;
