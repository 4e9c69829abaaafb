//! gitlab-mcp CLI Library
//!
//! Command-line interface definitions, the one-shot `call` and `list`
//! commands, logging setup and exit codes for the `gitlab-mcp` binary.

/// One-shot tool calls
pub mod call;
/// Command-line interface definitions and argument parsing
pub mod cli;
/// Shell completion generation
pub mod completions;
/// CLI error type and exit code mapping
pub mod error;
/// Exit codes used by the CLI application
pub mod exit_codes;
/// Tool catalog listing
pub mod list;
/// Tracing subscriber setup
pub mod logging;
/// Shutdown signal handling
pub mod signal_handler;
