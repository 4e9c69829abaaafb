//! Environment variable loading utilities
//!
//! Configuration values can be overridden from the environment. All keys
//! share a prefix so that `EnvLoader::new("GITLAB_MCP").load_string("PROGRAM", ..)`
//! reads `GITLAB_MCP_PROGRAM`.

use std::env;
use std::str::FromStr;

/// Load an environment variable with a string default
///
/// Empty values are treated as unset.
pub fn load_env_string(key: &str, default: &str) -> String {
    load_env_optional(key).unwrap_or_else(|| default.to_string())
}

/// Load an environment variable as an `Option<T>`
///
/// Returns `None` when the variable is unset, empty, or fails to parse.
pub fn load_env_optional<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| v.parse().ok())
}

/// Builder for loading multiple environment variables with consistent prefix
#[derive(Debug)]
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    /// Create a new environment loader with the given prefix
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    /// Full variable name for a suffix
    pub fn key(&self, suffix: &str) -> String {
        format!("{}_{}", self.prefix, suffix)
    }

    /// Load a string value with default
    pub fn load_string(&self, suffix: &str, default: &str) -> String {
        load_env_string(&self.key(suffix), default)
    }

    /// Load an optional value
    pub fn load_optional<T>(&self, suffix: &str) -> Option<T>
    where
        T: FromStr,
    {
        load_env_optional(&self.key(suffix))
    }
}
