//! Unified error handling for the gitlab-mcp library
//!
//! Every failure a tool call can produce is a variant of [`GitlabMcpError`].
//! The `Display` text of a variant is exactly the message relayed back to the
//! MCP client, so variants that wrap `glab` output print that output verbatim.

use crate::config::ConfigError;
use std::fmt;
use std::io;
use thiserror::Error;

/// The main error type for the gitlab-mcp library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GitlabMcpError {
    /// The call named a tool that is not in the catalog
    #[error("Unknown tool: {name}")]
    UnknownTool {
        /// Name as sent by the client
        name: String,
    },

    /// A required parameter was absent or null
    #[error("Missing required argument '{key}' for tool '{tool}'")]
    MissingArgument {
        /// Tool being invoked
        tool: String,
        /// Parameter key
        key: String,
    },

    /// A parameter did not match its declared kind or allowed values
    #[error("Invalid argument '{key}' for tool '{tool}': {reason}")]
    InvalidArgument {
        /// Tool being invoked
        tool: String,
        /// Parameter key
        key: String,
        /// What was wrong with the value
        reason: String,
    },

    /// The external program ran and exited with a nonzero status
    #[error("{}", command_failure_message(.program, .code, .stderr))]
    CommandFailed {
        /// Program that was run
        program: String,
        /// Exit code, `-1` when the process was terminated by a signal
        code: i32,
        /// Captured standard error
        stderr: String,
    },

    /// The external program could not be started
    #[error("{source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The MCP transport failed to start or terminated abnormally
    #[error("Transport error: {0}")]
    Transport(String),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn command_failure_message(program: &str, code: &i32, stderr: &str) -> String {
    if stderr.is_empty() {
        format!("{program} exited with code {code}")
    } else {
        stderr.to_string()
    }
}

impl GitlabMcpError {
    /// Create an invalid argument error
    pub fn invalid_argument(
        tool: impl Into<String>,
        key: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            tool: tool.into(),
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error was produced before any process was spawned
    pub fn is_rejected_call(&self) -> bool {
        matches!(
            self,
            Self::UnknownTool { .. } | Self::MissingArgument { .. } | Self::InvalidArgument { .. }
        )
    }
}

/// Result type alias for gitlab-mcp operations
pub type Result<T> = std::result::Result<T, GitlabMcpError>;

/// Error chain formatter for detailed error reporting
pub struct ErrorChain<'a>(&'a dyn std::error::Error);

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;

        let mut current = self.0.source();
        let mut level = 1;

        while let Some(err) = current {
            write!(f, "\n{:indent$}Caused by: {}", "", err, indent = level * 2)?;
            current = err.source();
            level += 1;
        }

        Ok(())
    }
}

/// Extension trait for error types to format the full error chain
pub trait ErrorChainExt {
    /// Format the full error chain
    fn error_chain(&self) -> ErrorChain<'_>;
}

impl<E: std::error::Error> ErrorChainExt for E {
    fn error_chain(&self) -> ErrorChain<'_> {
        ErrorChain(self)
    }
}
