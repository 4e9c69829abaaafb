//! Common utilities module
//!
//! Shared helpers used across the gitlab-mcp codebase.

/// Environment variable loading utilities
pub mod env_loader;

// Re-export commonly used items
pub use env_loader::{load_env_optional, load_env_string, EnvLoader};
