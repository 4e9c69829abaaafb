//! Issue list tool
//!
//! `glab issue list [-R repo] [--state s] [--label l] [--assignee a]
//! [--author a] [--search q] [--per-page n] [--page n]`

use super::{flags, CommandArgs};
use crate::mcp::catalog::{ParameterSpec, ToolDefinition};
use serde::{Deserialize, Serialize};

/// Tool name
pub const NAME: &str = "issue_list";

/// Accepted values of `state`
pub const STATES: &[&str] = &["opened", "closed", "all"];

/// Request structure for listing issues
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ListIssuesRequest {
    /// Repository in OWNER/REPO format
    pub repo: Option<String>,
    /// Filter by issue state
    pub state: Option<String>,
    /// Comma-separated list of labels to filter by
    pub labels: Option<String>,
    /// Filter by assignee username
    pub assignee: Option<String>,
    /// Filter by author username
    pub author: Option<String>,
    /// Search issues by title and description
    pub search: Option<String>,
    /// Number of issues per page
    pub per_page: Option<i64>,
    /// Page number
    pub page: Option<i64>,
}

impl ListIssuesRequest {
    /// Translate into `glab` arguments
    pub fn to_args(&self) -> Vec<String> {
        CommandArgs::new("list")
            .optional(flags::REPO, self.repo.as_deref())
            .optional(flags::STATE, self.state.as_deref())
            .optional(flags::LABEL, self.labels.as_deref())
            .optional(flags::ASSIGNEE, self.assignee.as_deref())
            .optional(flags::AUTHOR, self.author.as_deref())
            .optional(flags::SEARCH, self.search.as_deref())
            .optional_number(flags::PER_PAGE, self.per_page)
            .optional_number(flags::PAGE, self.page)
            .build()
    }
}

/// Catalog entry
pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        NAME,
        "List project issues. Use --all for all issues, or filter by state, labels, assignee, etc.",
    )
    .with_parameter(ParameterSpec::text(
        "repo",
        "Repository in OWNER/REPO format (optional, uses current repo if not specified)",
    ))
    .with_parameter(ParameterSpec::text("state", "Filter by issue state").one_of(STATES))
    .with_parameter(ParameterSpec::text(
        "labels",
        "Comma-separated list of labels to filter by",
    ))
    .with_parameter(ParameterSpec::text("assignee", "Filter by assignee username"))
    .with_parameter(ParameterSpec::text("author", "Filter by author username"))
    .with_parameter(ParameterSpec::text(
        "search",
        "Search issues by title and description",
    ))
    .with_parameter(ParameterSpec::integer(
        "per_page",
        "Number of issues per page (default 30)",
    ))
    .with_parameter(ParameterSpec::integer("page", "Page number"))
}
