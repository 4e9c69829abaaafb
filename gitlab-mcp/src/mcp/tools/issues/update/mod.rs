//! Issue update tool
//!
//! `glab issue update <id> [--title t] [--description d] [--label l]
//! [--unlabel l] [--assignee a] [--unassign] [--milestone m] [--confidential] [-R repo]`

use super::{flags, issue_id_param, repo_param, CommandArgs};
use crate::mcp::catalog::{ParameterSpec, ToolDefinition};
use serde::{Deserialize, Serialize};

/// Tool name
pub const NAME: &str = "issue_update";

/// Request structure for updating an issue
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UpdateIssueRequest {
    /// The issue ID/number
    pub issue_id: i64,
    /// New issue title
    pub title: Option<String>,
    /// New issue description/body
    pub description: Option<String>,
    /// Labels to set
    pub labels: Option<String>,
    /// Labels to remove
    pub unlabel: Option<String>,
    /// Assignee usernames
    pub assignees: Option<String>,
    /// Remove all assignees
    pub unassign: Option<bool>,
    /// Milestone title or ID
    pub milestone: Option<String>,
    /// Make the issue confidential
    pub confidential: Option<bool>,
    /// Repository in OWNER/REPO format
    pub repo: Option<String>,
}

impl UpdateIssueRequest {
    /// Translate into `glab` arguments
    pub fn to_args(&self) -> Vec<String> {
        CommandArgs::new("update")
            .issue_id(self.issue_id)
            .optional(flags::TITLE, self.title.as_deref())
            .optional(flags::DESCRIPTION, self.description.as_deref())
            .optional(flags::LABEL, self.labels.as_deref())
            .optional(flags::UNLABEL, self.unlabel.as_deref())
            .optional(flags::ASSIGNEE, self.assignees.as_deref())
            .switch(flags::UNASSIGN, self.unassign)
            .optional(flags::MILESTONE, self.milestone.as_deref())
            .switch(flags::CONFIDENTIAL, self.confidential)
            .optional(flags::REPO, self.repo.as_deref())
            .build()
    }
}

/// Catalog entry
pub fn definition() -> ToolDefinition {
    ToolDefinition::new(NAME, "Update an existing issue")
        .with_parameter(issue_id_param())
        .with_parameter(ParameterSpec::text("title", "New issue title"))
        .with_parameter(ParameterSpec::text("description", "New issue description/body"))
        .with_parameter(ParameterSpec::text(
            "labels",
            "Comma-separated list of labels to set",
        ))
        .with_parameter(ParameterSpec::text(
            "unlabel",
            "Comma-separated list of labels to remove",
        ))
        .with_parameter(ParameterSpec::text(
            "assignees",
            "Comma-separated list of assignee usernames",
        ))
        .with_parameter(ParameterSpec::boolean("unassign", "Remove all assignees"))
        .with_parameter(ParameterSpec::text("milestone", "Milestone title or ID"))
        .with_parameter(ParameterSpec::boolean(
            "confidential",
            "Make the issue confidential",
        ))
        .with_parameter(repo_param())
}
