use anyhow::Result;
use gitlab_mcp::mcp::{ToolCatalog, ToolDefinition};
use serde_json::{json, Value};
use std::io::{self, Write};
use tabled::{
    settings::{object::Rows, Alignment, Color, Modify, Style},
    Table, Tabled,
};

use crate::cli::{Cli, ListFormat};

#[derive(Tabled)]
struct ToolRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Parameters")]
    parameters: String,
}

impl From<&ToolDefinition> for ToolRow {
    fn from(tool: &ToolDefinition) -> Self {
        let parameters = tool
            .parameters
            .iter()
            .map(|p| {
                if p.required {
                    format!("{}*", p.key)
                } else {
                    p.key.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            name: tool.name.to_string(),
            description: tool.description.to_string(),
            parameters,
        }
    }
}

/// Tool definitions in the shape `tools/list` publishes them
fn tools_as_json(tools: &[ToolDefinition]) -> Value {
    Value::Array(
        tools
            .iter()
            .map(|tool| {
                json!({
                    "name": tool.name,
                    "description": tool.description,
                    "inputSchema": tool.input_schema(),
                })
            })
            .collect(),
    )
}

pub fn write_tool_list<W: Write>(
    tools: &[ToolDefinition],
    format: ListFormat,
    colored: bool,
    out: &mut W,
) -> Result<()> {
    match format {
        ListFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&tools_as_json(tools))?)?;
        }
        ListFormat::Table => {
            let rows: Vec<ToolRow> = tools.iter().map(ToolRow::from).collect();
            let mut table = Table::new(rows);
            table.with(Style::modern());

            if colored {
                table.with(Modify::new(Rows::first()).with(Color::FG_BRIGHT_CYAN));
            }
            table.with(Modify::new(Rows::new(1..)).with(Alignment::left()));

            writeln!(out, "{table}")?;
            writeln!(out, "* required parameter")?;
        }
    }
    Ok(())
}

pub fn run_list_command(format: ListFormat) -> Result<()> {
    let mut stdout = io::stdout();
    write_tool_list(
        ToolCatalog::global().list_tools(),
        format,
        Cli::is_tty(),
        &mut stdout,
    )
}
