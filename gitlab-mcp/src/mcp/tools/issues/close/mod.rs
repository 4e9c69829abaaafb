//! Issue close tool
//!
//! `glab issue close <id> [-R repo]`

use super::{issue_id_param, repo_param, IssueRef};
use crate::mcp::catalog::ToolDefinition;

/// Tool name
pub const NAME: &str = "issue_close";

/// Request structure for closing an issue
pub type CloseIssueRequest = IssueRef;

/// Translate into `glab` arguments
pub fn to_args(request: &CloseIssueRequest) -> Vec<String> {
    request.to_args("close")
}

/// Catalog entry
pub fn definition() -> ToolDefinition {
    ToolDefinition::new(NAME, "Close an issue")
        .with_parameter(issue_id_param())
        .with_parameter(repo_param())
}
