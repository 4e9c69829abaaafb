//! Configuration management for gitlab-mcp
//!
//! Values are resolved with the following precedence (lowest first):
//! 1. Built-in defaults
//! 2. `gitlab-mcp.yaml`
//! 3. `GITLAB_MCP_*` environment variables
//!
//! Command-line flags are applied on top of this by the CLI.

use crate::common::env_loader::EnvLoader;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program invoked for every tool call unless configured otherwise
pub const DEFAULT_PROGRAM: &str = "glab";

/// File name searched for YAML configuration
pub const CONFIG_FILE_NAME: &str = "gitlab-mcp.yaml";

/// Prefix shared by all configuration environment variables
pub const ENV_PREFIX: &str = "GITLAB_MCP";

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file from disk
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        /// Path to the configuration file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML content from a configuration file
    #[error("Invalid YAML syntax in {path}:\n{source}\n\nHint: Check for proper indentation and YAML formatting")]
    YamlParse {
        /// Path to the configuration file with invalid YAML content
        path: PathBuf,
        /// Underlying YAML parsing error
        #[source]
        source: serde_yaml::Error,
    },

    /// Invalid configuration value for a specific field
    #[error("Invalid configuration value for '{field}': {value:?}\n{hint}")]
    InvalidValue {
        /// Name of the configuration field
        field: String,
        /// The invalid value that was provided
        value: String,
        /// How to fix it
        hint: String,
    },
}

/// Runtime configuration for the server and CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// External program used to fulfil tool calls (default: "glab")
    pub program: String,
    /// When set, logs are appended to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from the first `gitlab-mcp.yaml` found and the environment
    ///
    /// Returns the error for a configuration file that was found but ignored,
    /// so the caller can report it once logging is set up.
    pub fn load() -> (Self, Option<ConfigError>) {
        Self::load_from(Self::find_yaml_config_file().as_deref())
    }

    /// Load configuration from an explicit YAML file (if any) and the environment
    ///
    /// An unreadable or invalid YAML file is skipped and its error returned
    /// alongside the configuration built without it.
    pub fn load_from(path: Option<&Path>) -> (Self, Option<ConfigError>) {
        let mut config = Self::default();
        let mut ignored = None;

        if let Some(path) = path {
            match YamlConfig::load_from_file(path) {
                Ok(yaml_config) => yaml_config.apply_to_config(&mut config),
                Err(e) => ignored = Some(e),
            }
        }

        config.apply_env_vars();
        (config, ignored)
    }

    /// Replace the program, typically from a command-line flag
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Replace the log file, typically from a command-line flag
    pub fn with_log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = Some(log_file.into());
        self
    }

    fn apply_env_vars(&mut self) {
        let loader = EnvLoader::new(ENV_PREFIX);

        self.program = loader.load_string("PROGRAM", &self.program);
        if let Some(log_file) = loader.load_optional::<PathBuf>("LOG_FILE") {
            self.log_file = Some(log_file);
        }
    }

    /// Validate the current configuration settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_program(&self.program)
    }

    /// Find the configuration file
    ///
    /// Search order:
    /// 1. `./gitlab-mcp.yaml`
    /// 2. `~/.config/gitlab-mcp/gitlab-mcp.yaml`
    pub fn find_yaml_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![PathBuf::from(CONFIG_FILE_NAME)];

        if let Some(home_dir) = dirs::home_dir() {
            search_paths.push(
                home_dir
                    .join(".config")
                    .join("gitlab-mcp")
                    .join(CONFIG_FILE_NAME),
            );
        }

        let found = search_paths.into_iter().find(|path| path.is_file());
        match &found {
            Some(path) => tracing::debug!("Found configuration file: {:?}", path),
            None => tracing::debug!("No {} configuration file found", CONFIG_FILE_NAME),
        }
        found
    }

    /// Example YAML configuration file content
    pub fn example_yaml_config() -> &'static str {
        r#"# gitlab-mcp.yaml

# Program invoked for every tool call
program: "glab"

# Append logs to this file instead of stderr
# log_file: "/tmp/gitlab-mcp.log"
"#
    }
}

fn validate_program(program: &str) -> Result<(), ConfigError> {
    if program.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "program".to_string(),
            value: program.to_string(),
            hint: "program must name the glab executable or a path to it".to_string(),
        });
    }
    Ok(())
}

/// Configuration loaded from `gitlab-mcp.yaml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct YamlConfig {
    /// External program to invoke
    pub program: Option<String>,
    /// Log file path
    pub log_file: Option<PathBuf>,
}

impl YamlConfig {
    /// Apply YAML configuration values to an existing Config
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(ref program) = self.program {
            config.program = program.clone();
        }
        if let Some(ref log_file) = self.log_file {
            config.log_file = Some(log_file.clone());
        }
    }

    /// Load and validate YAML configuration from a file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!("Loading YAML configuration from: {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: YamlConfig =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::YamlParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        if let Some(ref program) = config.program {
            validate_program(program)?;
        }

        Ok(config)
    }
}
