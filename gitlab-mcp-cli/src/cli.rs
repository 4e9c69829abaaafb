use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::io;
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "gitlab-mcp")]
#[command(version)]
#[command(about = "An MCP server for managing GitLab issues through glab")]
#[command(long_about = "
gitlab-mcp is an MCP (Model Context Protocol) server that lets AI assistants
list, view, create, update, close, reopen and comment on GitLab issues. Every
tool call is carried out by the glab command-line client, which must be
installed and authenticated.

Example usage:
  gitlab-mcp                # Run as MCP server on stdio
  gitlab-mcp list           # Show the available tools
  gitlab-mcp call issue_view --args '{\"issue_id\": 42}'
  gitlab-mcp completion bash > ~/.bashrc.d/gitlab-mcp  # Generate bash completions
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Program used to run tool calls (default: glab)
    #[arg(long, global = true, value_name = "PATH")]
    pub program: Option<String>,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server on stdio (default)
    #[command(long_about = "
Runs gitlab-mcp as an MCP server speaking JSON-RPC over stdin/stdout. This is
the default when no subcommand is given. Logs go to stderr, or to the file
named by --log-file, GITLAB_MCP_LOG_FILE or log_file in gitlab-mcp.yaml.

Example:
  gitlab-mcp serve
  # Or configure in your MCP client settings
")]
    Serve,
    /// List the available tools
    #[command(long_about = "
Lists every tool the server offers, with its parameters. Required parameters
are marked with '*'.

Output formats:
  table  - Formatted table (default)
  json   - Tool definitions as published over MCP

Examples:
  gitlab-mcp list
  gitlab-mcp list --format json
")]
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: ListFormat,
    },
    /// Run a single tool call and print its result
    #[command(long_about = "
Runs one tool call the same way the MCP server would and prints the text the
client would receive. Arguments are a JSON object.

Exit codes:
  0 - The call succeeded
  1 - glab failed or could not be started
  2 - Invalid arguments or unknown tool

Examples:
  gitlab-mcp call issue_list --args '{\"state\": \"opened\"}'
  gitlab-mcp call issue_create --args '{\"title\": \"Bug\"}' --dry-run
")]
    Call {
        /// Tool name, e.g. issue_list
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, value_name = "JSON")]
        args: Option<String>,

        /// Print the command that would run instead of running it
        #[arg(long)]
        dry_run: bool,
    },
    /// Generate shell completion scripts
    #[command(long_about = "
Generates shell completion scripts for various shells. Supports:
- bash
- zsh
- fish
- powershell

Examples:
  gitlab-mcp completion bash > ~/.bashrc.d/gitlab-mcp
  gitlab-mcp completion zsh > ~/.zfunc/_gitlab-mcp
  gitlab-mcp completion fish > ~/.config/fish/completions/gitlab-mcp.fish
  gitlab-mcp completion --dir target/completions  # Every shell, one file each
")]
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum, required_unless_present = "dir", conflicts_with = "dir")]
        shell: Option<clap_complete::Shell>,

        /// Write scripts for every supported shell into this directory
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse the process arguments, exiting with clap's usage message on error
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse an explicit argument list, returning clap's error instead of exiting
    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }

    /// Whether stdout is attached to a terminal
    pub fn is_tty() -> bool {
        io::stdout().is_terminal()
    }
}
