//! MCP server implementation for GitLab issue tools

use super::catalog::ToolDefinition;
use super::dispatcher::Dispatcher;
use super::responses::into_call_result;
use crate::config::Config;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Name reported to clients during initialization
pub const SERVER_NAME: &str = "gitlab-mcp";

const INSTRUCTIONS: &str = "Manage GitLab issues through the glab command-line client. \
Use issue_list to find issues, issue_view to read one, issue_create and issue_update to edit, \
issue_close and issue_reopen to change state and issue_note to comment. \
Every tool accepts an optional repo in OWNER/REPO format; without it glab uses the repository \
of the server's working directory.";

/// MCP server exposing the issue tool catalog
#[derive(Clone, Debug)]
pub struct McpServer {
    dispatcher: Dispatcher,
}

impl McpServer {
    /// Create a server around a dispatcher
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Create a server that runs the configured program
    pub fn from_config(config: &Config) -> Self {
        Self::new(Dispatcher::from_config(config))
    }

    /// The dispatcher serving tool calls
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// All tools in the form published by `tools/list`
    pub fn tools(&self) -> Vec<Tool> {
        self.dispatcher.list_tools().iter().map(to_rmcp_tool).collect()
    }

    /// Run one tool call; failures come back as error-flagged results
    pub async fn call(&self, name: &str, arguments: Option<Map<String, Value>>) -> CallToolResult {
        let arguments = arguments.unwrap_or_default();
        into_call_result(self.dispatcher.invoke(name, &arguments).await)
    }
}

fn to_rmcp_tool(definition: &ToolDefinition) -> Tool {
    let schema = match definition.input_schema() {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    Tool {
        name: definition.name.into(),
        description: Some(definition.description.into()),
        input_schema: Arc::new(schema),
        annotations: None,
    }
}

impl ServerHandler for McpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );
        Ok(self.get_info())
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(self.call(&request.name, request.arguments).await)
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities {
                prompts: None,
                tools: Some(ToolsCapability { list_changed: None }),
                resources: None,
                logging: None,
                completions: None,
                experimental: None,
            },
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(INSTRUCTIONS.into()),
        }
    }
}
