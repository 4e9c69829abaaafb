//! # gitlab-mcp
//!
//! An MCP server that lets AI assistants manage GitLab issues through the
//! `glab` command-line client.
//!
//! ## Features
//!
//! - **Tool Catalog**: seven issue tools with JSON-Schema described arguments
//! - **Safe Invocation**: arguments are passed to `glab` as discrete tokens, never through a shell
//! - **MCP Support**: stdio server built on `rmcp`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gitlab_mcp::{Config, Dispatcher};
//! use serde_json::json;
//!
//! # async fn example() -> gitlab_mcp::Result<()> {
//! let (config, _ignored_file) = Config::load();
//! let dispatcher = Dispatcher::from_config(&config);
//! let arguments = json!({"state": "opened", "per_page": 5});
//! let text = dispatcher
//!     .invoke("issue_list", arguments.as_object().unwrap())
//!     .await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Model Context Protocol (MCP) server support
pub mod mcp;

/// Configuration management
pub mod config;

/// Common utilities
pub mod common;

/// Error types and handling
pub mod error;

pub use config::{Config, ConfigError};
pub use error::{ErrorChainExt, GitlabMcpError, Result};
pub use mcp::{Dispatcher, McpServer, ToolCatalog};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{GitlabMcpError, Result};
    pub use crate::mcp::{CommandRunner, Dispatcher, McpServer, ToolCatalog, ToolDefinition};
}
