//! Issue note tool
//!
//! `glab issue note <id> --message <text> [-R repo]`

use super::{flags, issue_id_param, repo_param, CommandArgs};
use crate::mcp::catalog::{ParameterSpec, ToolDefinition};
use serde::{Deserialize, Serialize};

/// Tool name
pub const NAME: &str = "issue_note";

/// Request structure for commenting on an issue
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NoteIssueRequest {
    /// The issue ID/number
    pub issue_id: i64,
    /// The comment text
    pub message: String,
    /// Repository in OWNER/REPO format
    pub repo: Option<String>,
}

impl NoteIssueRequest {
    /// Translate into `glab` arguments
    pub fn to_args(&self) -> Vec<String> {
        CommandArgs::new("note")
            .issue_id(self.issue_id)
            .value(flags::MESSAGE, &self.message)
            .optional(flags::REPO, self.repo.as_deref())
            .build()
    }
}

/// Catalog entry
pub fn definition() -> ToolDefinition {
    ToolDefinition::new(NAME, "Add a comment/note to an issue")
        .with_parameter(issue_id_param())
        .with_parameter(ParameterSpec::text("message", "The comment text").required())
        .with_parameter(repo_param())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note() {
        let request = NoteIssueRequest {
            issue_id: 9,
            message: "Looks good to me\n\n- tested on staging".to_string(),
            repo: Some("a/b".to_string()),
        };
        assert_eq!(
            request.to_args(),
            [
                "issue",
                "note",
                "9",
                "--message",
                "Looks good to me\n\n- tested on staging",
                "-R",
                "a/b"
            ]
        );
    }

    #[test]
    fn test_note_with_empty_message_still_passes_flag() {
        let request = NoteIssueRequest {
            issue_id: 9,
            ..Default::default()
        };
        assert_eq!(request.to_args(), ["issue", "note", "9", "--message", ""]);
    }
}
