//! Issue view tool
//!
//! `glab issue view <id> [-R repo] [--comments]`

use super::{flags, issue_id_param, repo_param, CommandArgs};
use crate::mcp::catalog::{ParameterSpec, ToolDefinition};
use serde::{Deserialize, Serialize};

/// Tool name
pub const NAME: &str = "issue_view";

/// Request structure for viewing an issue
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ViewIssueRequest {
    /// The issue ID/number
    pub issue_id: i64,
    /// Repository in OWNER/REPO format
    pub repo: Option<String>,
    /// Include comments in the output
    pub comments: Option<bool>,
}

impl ViewIssueRequest {
    /// Translate into `glab` arguments
    pub fn to_args(&self) -> Vec<String> {
        CommandArgs::new("view")
            .issue_id(self.issue_id)
            .optional(flags::REPO, self.repo.as_deref())
            .switch(flags::COMMENTS, self.comments)
            .build()
    }
}

/// Catalog entry
pub fn definition() -> ToolDefinition {
    ToolDefinition::new(NAME, "View details of a specific issue by ID")
        .with_parameter(issue_id_param())
        .with_parameter(repo_param())
        .with_parameter(ParameterSpec::boolean(
            "comments",
            "Include comments in the output",
        ))
}
