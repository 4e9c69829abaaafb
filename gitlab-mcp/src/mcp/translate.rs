//! Translation of validated tool calls into `glab` argument vectors
//!
//! A call is looked up in the catalog, validated against its definition and
//! decoded into a typed request. Each request renders its own arguments, so
//! user-supplied text always travels as exactly one argv element.

use crate::error::{GitlabMcpError, Result};
use crate::mcp::catalog::ToolCatalog;
use crate::mcp::tools::issues::{
    close::{self, CloseIssueRequest},
    create::{self, CreateIssueRequest},
    list::{self, ListIssuesRequest},
    note::{self, NoteIssueRequest},
    reopen::{self, ReopenIssueRequest},
    update::{self, UpdateIssueRequest},
    view::{self, ViewIssueRequest},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A decoded tool call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueCommand {
    /// `issue_list`
    List(ListIssuesRequest),
    /// `issue_view`
    View(ViewIssueRequest),
    /// `issue_create`
    Create(CreateIssueRequest),
    /// `issue_update`
    Update(UpdateIssueRequest),
    /// `issue_close`
    Close(CloseIssueRequest),
    /// `issue_reopen`
    Reopen(ReopenIssueRequest),
    /// `issue_note`
    Note(NoteIssueRequest),
}

impl IssueCommand {
    /// Decode arguments that already passed catalog validation
    pub fn parse(name: &str, arguments: Map<String, Value>) -> Result<Self> {
        let command = match name {
            list::NAME => Self::List(decode(name, arguments)?),
            view::NAME => Self::View(decode(name, arguments)?),
            create::NAME => Self::Create(decode(name, arguments)?),
            update::NAME => Self::Update(decode(name, arguments)?),
            close::NAME => Self::Close(decode(name, arguments)?),
            reopen::NAME => Self::Reopen(decode(name, arguments)?),
            note::NAME => Self::Note(decode(name, arguments)?),
            _ => {
                return Err(GitlabMcpError::UnknownTool {
                    name: name.to_string(),
                })
            }
        };
        Ok(command)
    }

    /// Name of the tool this command came from
    pub fn tool_name(&self) -> &'static str {
        match self {
            Self::List(_) => list::NAME,
            Self::View(_) => view::NAME,
            Self::Create(_) => create::NAME,
            Self::Update(_) => update::NAME,
            Self::Close(_) => close::NAME,
            Self::Reopen(_) => reopen::NAME,
            Self::Note(_) => note::NAME,
        }
    }

    /// Arguments passed to the external program, not including the program itself
    pub fn to_args(&self) -> Vec<String> {
        match self {
            Self::List(request) => request.to_args(),
            Self::View(request) => request.to_args(),
            Self::Create(request) => request.to_args(),
            Self::Update(request) => request.to_args(),
            Self::Close(request) => close::to_args(request),
            Self::Reopen(request) => reopen::to_args(request),
            Self::Note(request) => request.to_args(),
        }
    }
}

fn decode<T: DeserializeOwned>(tool: &str, arguments: Map<String, Value>) -> Result<T> {
    serde_json::from_value(Value::Object(arguments)).map_err(|e| {
        GitlabMcpError::InvalidArgument {
            tool: tool.to_string(),
            key: "arguments".to_string(),
            reason: e.to_string(),
        }
    })
}

/// Validate and decode a raw tool call
pub fn parse_call(
    catalog: &ToolCatalog,
    name: &str,
    arguments: &Map<String, Value>,
) -> Result<IssueCommand> {
    let definition = catalog.lookup(name).ok_or_else(|| GitlabMcpError::UnknownTool {
        name: name.to_string(),
    })?;
    let validated = definition.validate(arguments)?;
    IssueCommand::parse(definition.name, validated)
}

/// Translate a raw tool call into `glab` arguments using the global catalog
pub fn translate(name: &str, arguments: &Map<String, Value>) -> Result<Vec<String>> {
    parse_call(ToolCatalog::global(), name, arguments).map(|command| command.to_args())
}
