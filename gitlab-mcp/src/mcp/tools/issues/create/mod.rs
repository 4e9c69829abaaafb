//! Issue create tool
//!
//! `glab issue create --title <t> [--description d] [--label l] [--assignee a]
//! [--milestone m] [--confidential] [-R repo] --yes`

use super::{flags, repo_param, CommandArgs};
use crate::mcp::catalog::{ParameterSpec, ToolDefinition};
use serde::{Deserialize, Serialize};

/// Tool name
pub const NAME: &str = "issue_create";

/// Request structure for creating an issue
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CreateIssueRequest {
    /// Issue title
    pub title: String,
    /// Issue description/body
    pub description: Option<String>,
    /// Comma-separated list of labels
    pub labels: Option<String>,
    /// Comma-separated list of assignee usernames
    pub assignees: Option<String>,
    /// Milestone title or ID
    pub milestone: Option<String>,
    /// Make the issue confidential
    pub confidential: Option<bool>,
    /// Repository in OWNER/REPO format
    pub repo: Option<String>,
}

impl CreateIssueRequest {
    /// Translate into `glab` arguments
    ///
    /// `--yes` always closes the vector so glab never waits on a prompt.
    pub fn to_args(&self) -> Vec<String> {
        CommandArgs::new("create")
            .value(flags::TITLE, &self.title)
            .optional(flags::DESCRIPTION, self.description.as_deref())
            .optional(flags::LABEL, self.labels.as_deref())
            .optional(flags::ASSIGNEE, self.assignees.as_deref())
            .optional(flags::MILESTONE, self.milestone.as_deref())
            .switch(flags::CONFIDENTIAL, self.confidential)
            .optional(flags::REPO, self.repo.as_deref())
            .always(flags::YES)
            .build()
    }
}

/// Catalog entry
pub fn definition() -> ToolDefinition {
    ToolDefinition::new(NAME, "Create a new issue")
        .with_parameter(ParameterSpec::text("title", "Issue title").required())
        .with_parameter(ParameterSpec::text("description", "Issue description/body"))
        .with_parameter(ParameterSpec::text("labels", "Comma-separated list of labels"))
        .with_parameter(ParameterSpec::text(
            "assignees",
            "Comma-separated list of assignee usernames",
        ))
        .with_parameter(ParameterSpec::text("milestone", "Milestone title or ID"))
        .with_parameter(ParameterSpec::boolean(
            "confidential",
            "Make the issue confidential",
        ))
        .with_parameter(repo_param())
}
