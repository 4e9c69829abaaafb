//! Error handling for the gitlab-mcp CLI
//!
//! Errors keep their source chain and carry the exit code the process should
//! end with.

use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};
use gitlab_mcp::GitlabMcpError;
use std::error::Error;
use std::fmt;

/// CLI-specific result type that preserves error information
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type that includes both error information and suggested exit code
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: i32,
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl CliError {
    /// Create a new CLI error with a message and exit code
    pub fn new(message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            exit_code,
            source: None,
        }
    }

    /// Create a CLI error from another error with a specific exit code
    pub fn from_error<E: Error + Send + Sync + 'static>(error: E, exit_code: i32) -> Self {
        Self {
            message: error.to_string(),
            exit_code,
            source: Some(Box::new(error)),
        }
    }

    /// Create a CLI error with exit code 1 (tool or server failure)
    pub fn general<E: Error + Send + Sync + 'static>(error: E) -> Self {
        Self::from_error(error, EXIT_WARNING)
    }

    /// Create a CLI error with exit code 2 (invalid input)
    pub fn validation<E: Error + Send + Sync + 'static>(error: E) -> Self {
        Self::from_error(error, EXIT_ERROR)
    }

    /// Get the full error chain as a formatted string
    ///
    /// The message already is the text of the wrapped error, so the chain
    /// starts one level below it. A cause that repeats the line above it is
    /// skipped.
    pub fn full_chain(&self) -> String {
        let mut result = self.message.clone();
        let mut previous = self.message.clone();

        let mut current_source = self.source.as_ref().and_then(|e| e.source());
        while let Some(err) = current_source {
            let text = err.to_string();
            if text != previous {
                result.push_str(&format!("\n  Caused by: {text}"));
            }
            previous = text;
            current_source = err.source();
        }

        result
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

impl From<GitlabMcpError> for CliError {
    fn from(error: GitlabMcpError) -> Self {
        if error.is_rejected_call() {
            Self::validation(error)
        } else {
            Self::general(error)
        }
    }
}

/// Extension trait for converting results to CLI results
pub trait IntoCliResult<T> {
    /// Map the error to a [`CliError::general`]
    fn cli_general_error(self) -> CliResult<T>;
    /// Map the error to a [`CliError::validation`]
    fn cli_validation_error(self) -> CliResult<T>;
}

impl<T, E: Error + Send + Sync + 'static> IntoCliResult<T> for Result<T, E> {
    fn cli_general_error(self) -> CliResult<T> {
        self.map_err(CliError::general)
    }

    fn cli_validation_error(self) -> CliResult<T> {
        self.map_err(CliError::validation)
    }
}

/// Convert a CliResult to an exit code, printing the full error chain if needed
pub fn handle_cli_result<T>(result: CliResult<T>) -> i32 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.full_chain().trim_end());
            e.exit_code
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_rejected_calls_are_validation_errors() {
        let err: CliError = GitlabMcpError::UnknownTool {
            name: "nope".to_string(),
        }
        .into();
        assert_eq!(err.exit_code, EXIT_ERROR);
        assert_eq!(err.to_string(), "Unknown tool: nope");
    }

    #[test]
    fn test_command_failures_are_general_errors() {
        let err: CliError = GitlabMcpError::CommandFailed {
            program: "glab".to_string(),
            code: 1,
            stderr: "unauthorized".to_string(),
        }
        .into();
        assert_eq!(err.exit_code, EXIT_WARNING);
        assert_eq!(err.full_chain(), "unauthorized");
    }

    #[test]
    fn test_full_chain_lists_nested_causes() {
        let err: CliError = GitlabMcpError::Spawn {
            program: "glab".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        }
        .into();
        assert_eq!(err.full_chain(), "not found");

        let config_error = gitlab_mcp::ConfigError::FileRead {
            path: "gitlab-mcp.yaml".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        let err = CliError::general(GitlabMcpError::from(config_error));
        assert_eq!(
            err.full_chain(),
            "Configuration error: Failed to read configuration file gitlab-mcp.yaml: permission denied\n  \
             Caused by: Failed to read configuration file gitlab-mcp.yaml: permission denied\n  \
             Caused by: permission denied"
        );
    }

    #[test]
    fn test_into_cli_result() {
        let parsed: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err = parsed.cli_validation_error().unwrap_err();
        assert_eq!(err.exit_code, EXIT_ERROR);

        let ok: Result<i32, io::Error> = Ok(1);
        assert_eq!(ok.cli_general_error().unwrap(), 1);

        let failed: Result<(), io::Error> = Err(io::Error::other("disk full"));
        assert_eq!(failed.cli_general_error().unwrap_err().exit_code, EXIT_WARNING);

        assert_eq!(handle_cli_result::<()>(Err(CliError::new("bad", 3))), 3);
        assert_eq!(handle_cli_result(Ok(())), EXIT_SUCCESS);
    }
}
