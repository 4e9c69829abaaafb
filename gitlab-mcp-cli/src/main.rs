use std::process;

use gitlab_mcp::{Config, ErrorChainExt, GitlabMcpError, McpServer};
use gitlab_mcp_cli::cli::{Cli, Commands};
use gitlab_mcp_cli::error::{handle_cli_result, CliError};
use gitlab_mcp_cli::exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};
use gitlab_mcp_cli::{call, completions, list, logging, signal_handler};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    let (mut config, ignored_file) = Config::load();
    if let Some(program) = cli.program.clone() {
        config = config.with_program(program);
    }
    if let Some(log_file) = cli.log_file.clone() {
        config = config.with_log_file(log_file);
    }

    let level = logging::level_for_flags(cli.quiet, cli.debug, cli.verbose);
    logging::init_logging(level, config.log_file.as_deref());
    if let Some(e) = ignored_file {
        tracing::warn!(
            "Ignoring configuration file, falling back to env vars and defaults: {}",
            e
        );
    }
    tracing::debug!("Loaded configuration: {:?}", config);

    if let Err(e) = config.validate() {
        process::exit(handle_cli_result::<()>(Err(CliError::validation(e))));
    }

    let exit_code = match cli.command {
        None | Some(Commands::Serve) => {
            tracing::info!("Starting MCP server");
            run_server(config).await
        }
        Some(Commands::List { format }) => {
            tracing::debug!("Listing tools as {:?}", format);
            run_list(format)
        }
        Some(Commands::Call {
            tool,
            args,
            dry_run,
        }) => {
            tracing::debug!("Running call command for '{}'", tool);
            handle_cli_result(call::run_call_command(&config, &tool, args.as_deref(), dry_run).await)
        }
        Some(Commands::Completion { shell, dir }) => {
            tracing::debug!("Generating completion for {:?} into {:?}", shell, dir);
            run_completions(shell, dir.as_deref())
        }
    };

    process::exit(exit_code);
}

async fn run_server(config: Config) -> i32 {
    use rmcp::serve_server;
    use rmcp::transport::io::stdio;
    use tokio_util::sync::CancellationToken;

    let server = McpServer::from_config(&config);
    tracing::info!("Tool calls will run {}", server.dispatcher().program());

    let ct = CancellationToken::new();
    signal_handler::spawn_shutdown_listener(ct.clone());

    eprintln!("GitLab MCP server started");

    let running = match serve_server(server, stdio()).await {
        Ok(running) => running,
        Err(e) => return fatal(GitlabMcpError::Transport(e.to_string())),
    };
    tracing::info!("MCP client connected");

    tokio::select! {
        result = running.waiting() => match result {
            Ok(reason) => {
                tracing::info!("MCP server exited: {:?}", reason);
                EXIT_SUCCESS
            }
            Err(e) => fatal(GitlabMcpError::Transport(e.to_string())),
        },
        _ = ct.cancelled() => {
            tracing::info!("MCP server stopped by signal");
            EXIT_SUCCESS
        }
    }
}

fn fatal(error: GitlabMcpError) -> i32 {
    tracing::error!("MCP server error: {}", error);
    eprintln!("Fatal error: {}", error.error_chain());
    EXIT_WARNING
}

fn run_list(format: gitlab_mcp_cli::cli::ListFormat) -> i32 {
    match list::run_list_command(format) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_WARNING
        }
    }
}

fn run_completions(shell: Option<clap_complete::Shell>, dir: Option<&std::path::Path>) -> i32 {
    let result = match (shell, dir) {
        (_, Some(dir)) => completions::generate_completions(dir).map(|written| {
            for path in written {
                println!("{}", path.display());
            }
        }),
        (Some(shell), None) => completions::print_completion(shell),
        (None, None) => Ok(()),
    };
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}
