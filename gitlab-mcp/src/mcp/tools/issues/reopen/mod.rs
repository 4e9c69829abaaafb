//! Issue reopen tool
//!
//! `glab issue reopen <id> [-R repo]`

use super::{issue_id_param, repo_param, IssueRef};
use crate::mcp::catalog::ToolDefinition;

/// Tool name
pub const NAME: &str = "issue_reopen";

/// Request structure for reopening an issue
pub type ReopenIssueRequest = IssueRef;

/// Translate into `glab` arguments
pub fn to_args(request: &ReopenIssueRequest) -> Vec<String> {
    request.to_args("reopen")
}

/// Catalog entry
pub fn definition() -> ToolDefinition {
    ToolDefinition::new(NAME, "Reopen a closed issue")
        .with_parameter(issue_id_param())
        .with_parameter(repo_param())
}
