//! One-shot tool calls from the command line

use crate::error::{CliError, CliResult, IntoCliResult};
use crate::exit_codes::EXIT_ERROR;
use gitlab_mcp::{Config, Dispatcher};
use serde_json::{Map, Value};
use std::io::{self, Write};

/// Parse the `--args` value into an arguments object
///
/// A missing value is an empty object.
pub fn parse_arguments(raw: Option<&str>) -> CliResult<Map<String, Value>> {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return Ok(Map::new());
    };

    match serde_json::from_str::<Value>(raw).cli_validation_error()? {
        Value::Object(map) => Ok(map),
        other => Err(CliError::new(
            format!("--args must be a JSON object, got: {other}"),
            EXIT_ERROR,
        )),
    }
}

/// Render a planned invocation as a JSON array of the program and its arguments
pub fn format_plan(program: &str, args: &[String]) -> String {
    let argv: Vec<&str> = std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect();
    serde_json::Value::from(argv).to_string()
}

pub async fn run_call_command(
    config: &Config,
    tool: &str,
    raw_args: Option<&str>,
    dry_run: bool,
) -> CliResult<()> {
    let arguments = parse_arguments(raw_args)?;
    let dispatcher = Dispatcher::from_config(config);

    let text = if dry_run {
        let args = dispatcher.plan(tool, &arguments)?;
        format_plan(dispatcher.program(), &args)
    } else {
        dispatcher.invoke(tool, &arguments).await?
    };

    let mut stdout = io::stdout();
    write!(stdout, "{text}").cli_general_error()?;
    if !text.ends_with('\n') {
        writeln!(stdout).cli_general_error()?;
    }
    stdout.flush().cli_general_error()
}
