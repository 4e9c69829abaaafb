//! Issue tools for MCP operations
//!
//! Each tool lives in its own submodule with its request type, its catalog
//! definition and the translation of a request into `glab issue` arguments.

pub mod close;
pub mod create;
pub mod list;
pub mod note;
pub mod reopen;
pub mod update;
pub mod view;

use crate::mcp::catalog::{ParameterSpec, ToolDefinition};
use serde::{Deserialize, Serialize};

/// Subcommand group every tool runs under
pub const SUBCOMMAND: &str = "issue";

/// `glab issue` flag names, keyed by the parameter they carry
///
/// `ASSIGNEE` serves both the `assignee` filter of `issue_list` and the
/// `assignees` value of `issue_create` / `issue_update`: glab spells both
/// `--assignee`.
pub mod flags {
    /// `repo`
    pub const REPO: &str = "-R";
    /// `state`
    pub const STATE: &str = "--state";
    /// `labels`
    pub const LABEL: &str = "--label";
    /// `assignee` and `assignees`
    pub const ASSIGNEE: &str = "--assignee";
    /// `author`
    pub const AUTHOR: &str = "--author";
    /// `search`
    pub const SEARCH: &str = "--search";
    /// `per_page`
    pub const PER_PAGE: &str = "--per-page";
    /// `page`
    pub const PAGE: &str = "--page";
    /// `comments`
    pub const COMMENTS: &str = "--comments";
    /// `title`
    pub const TITLE: &str = "--title";
    /// `description`
    pub const DESCRIPTION: &str = "--description";
    /// `milestone`
    pub const MILESTONE: &str = "--milestone";
    /// `confidential`
    pub const CONFIDENTIAL: &str = "--confidential";
    /// `unlabel`
    pub const UNLABEL: &str = "--unlabel";
    /// `unassign`
    pub const UNASSIGN: &str = "--unassign";
    /// `message`
    pub const MESSAGE: &str = "--message";
    /// Skips glab's interactive confirmation on create
    pub const YES: &str = "--yes";
}

/// Builder for a `glab issue <verb> ...` argument vector
///
/// Optional values that are absent or empty never leave a trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandArgs {
    args: Vec<String>,
}

impl CommandArgs {
    /// Start with `issue <verb>`
    pub fn new(verb: &str) -> Self {
        Self {
            args: vec![SUBCOMMAND.to_string(), verb.to_string()],
        }
    }

    /// Append a positional issue identifier
    pub fn issue_id(mut self, issue_id: i64) -> Self {
        self.args.push(issue_id.to_string());
        self
    }

    /// Append `flag value` unconditionally
    pub fn value(mut self, flag: &str, value: &str) -> Self {
        self.args.push(flag.to_string());
        self.args.push(value.to_string());
        self
    }

    /// Append `flag value` when the value is present and non-empty
    pub fn optional(self, flag: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.value(flag, value),
            _ => self,
        }
    }

    /// Append `flag <decimal>` when the value is present and non-zero
    pub fn optional_number(self, flag: &str, value: Option<i64>) -> Self {
        match value {
            Some(value) if value != 0 => self.value(flag, &value.to_string()),
            _ => self,
        }
    }

    /// Append a bare `flag` when the value is true
    pub fn switch(mut self, flag: &str, value: Option<bool>) -> Self {
        if value == Some(true) {
            self.args.push(flag.to_string());
        }
        self
    }

    /// Append a bare `flag` unconditionally
    pub fn always(mut self, flag: &str) -> Self {
        self.args.push(flag.to_string());
        self
    }

    /// Finish the argument vector
    pub fn build(self) -> Vec<String> {
        self.args
    }
}

/// Request shared by tools that only address an issue (close, reopen)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct IssueRef {
    /// The issue ID/number
    pub issue_id: i64,
    /// Repository in OWNER/REPO format
    pub repo: Option<String>,
}

impl IssueRef {
    /// `issue <verb> <id> [-R repo]`
    pub fn to_args(&self, verb: &str) -> Vec<String> {
        CommandArgs::new(verb)
            .issue_id(self.issue_id)
            .optional(flags::REPO, self.repo.as_deref())
            .build()
    }
}

pub(crate) fn issue_id_param() -> ParameterSpec {
    ParameterSpec::integer("issue_id", "The issue ID/number").required()
}

pub(crate) fn repo_param() -> ParameterSpec {
    ParameterSpec::text("repo", "Repository in OWNER/REPO format (optional)")
}

/// Definitions of every issue tool, in catalog order
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        list::definition(),
        view::definition(),
        create::definition(),
        update::definition(),
        close::definition(),
        reopen::definition(),
        note::definition(),
    ]
}
