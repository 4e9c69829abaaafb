//! Model Context Protocol (MCP) server support
//!
//! This module exposes the GitLab issue tools over MCP and runs each call
//! through the `glab` command-line client.

pub mod catalog;
pub mod dispatcher;
pub mod process;
pub mod responses;
pub mod server;
pub mod tools;
pub mod translate;

pub use catalog::{ParameterKind, ParameterSpec, ToolCatalog, ToolDefinition};
pub use dispatcher::Dispatcher;
pub use process::{CommandOutput, CommandRunner, GlabRunner};
pub use server::McpServer;
pub use translate::{translate, IssueCommand};
