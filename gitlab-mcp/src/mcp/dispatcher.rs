//! Dispatching tool calls to the external program
//!
//! The dispatcher is the only component that touches the process boundary.
//! It holds immutable state, so one instance can serve any number of
//! concurrent calls.

use crate::config::Config;
use crate::error::{GitlabMcpError, Result};
use crate::mcp::catalog::{ToolCatalog, ToolDefinition};
use crate::mcp::process::{CommandRunner, GlabRunner};
use crate::mcp::translate::parse_call;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Text returned for a successful call that printed nothing
pub const EMPTY_SUCCESS_MESSAGE: &str = "Command completed successfully";

/// Validates, translates and runs tool calls
#[derive(Clone)]
pub struct Dispatcher {
    catalog: &'static ToolCatalog,
    runner: Arc<dyn CommandRunner>,
    program: String,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("tools", &self.catalog.len())
            .field("program", &self.program)
            .finish()
    }
}

impl Dispatcher {
    /// Create a dispatcher running `program` through `runner`
    pub fn new(runner: Arc<dyn CommandRunner>, program: impl Into<String>) -> Self {
        Self {
            catalog: ToolCatalog::global(),
            runner,
            program: program.into(),
        }
    }

    /// Create a dispatcher that spawns the configured program
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(GlabRunner), config.program.clone())
    }

    /// Program every call is run with
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The catalog, in stable order
    pub fn list_tools(&self) -> &[ToolDefinition] {
        self.catalog.list_tools()
    }

    /// Validate and translate a call without running anything
    pub fn plan(&self, name: &str, arguments: &Map<String, Value>) -> Result<Vec<String>> {
        parse_call(self.catalog, name, arguments).map(|command| command.to_args())
    }

    /// Run a call to completion and return the text for the client
    pub async fn invoke(&self, name: &str, arguments: &Map<String, Value>) -> Result<String> {
        let command = match parse_call(self.catalog, name, arguments) {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!("Rejected call to '{}': {}", name, e);
                return Err(e);
            }
        };
        let name = command.tool_name();
        let args = command.to_args();

        tracing::debug!("Running {} {:?} for '{}'", self.program, args, name);

        let output = self
            .runner
            .run(&self.program, &args)
            .await
            .map_err(|source| {
                tracing::warn!("Failed to start {}: {}", self.program, source);
                GitlabMcpError::Spawn {
                    program: self.program.clone(),
                    source,
                }
            })?;

        if !output.success() {
            tracing::warn!("'{}' failed with exit code {}", name, output.code);
            return Err(GitlabMcpError::CommandFailed {
                program: self.program.clone(),
                code: output.code,
                stderr: output.stderr,
            });
        }

        tracing::info!("'{}' completed ({} bytes of output)", name, output.stdout.len());

        if output.stdout.is_empty() {
            Ok(EMPTY_SUCCESS_MESSAGE.to_string())
        } else {
            Ok(output.stdout)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::process::CommandOutput;
    use async_trait::async_trait;
    use serde_json::json;
    use std::io;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Records every invocation and answers with a fixed outcome
    struct MockRunner {
        outcome: fn() -> io::Result<CommandOutput>,
        calls: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl MockRunner {
        fn new(outcome: fn() -> io::Result<CommandOutput>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(String, Vec<String>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandRunner for MockRunner {
        async fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
            self.calls
                .lock()
                .unwrap()
                .push((program.to_string(), args.to_vec()));
            (self.outcome)()
        }
    }

    fn exited(code: i32, stdout: &str, stderr: &str) -> io::Result<CommandOutput> {
        Ok(CommandOutput {
            code,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        })
    }

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_success_returns_stdout() {
        let runner = MockRunner::new(|| exited(0, "done", ""));
        let dispatcher = Dispatcher::new(runner.clone(), "glab");

        let text = dispatcher
            .invoke("issue_close", &args(json!({"issue_id": 12})))
            .await
            .unwrap();

        assert_eq!(text, "done");
        assert_eq!(
            runner.calls(),
            [(
                "glab".to_string(),
                vec!["issue".to_string(), "close".to_string(), "12".to_string()]
            )]
        );
    }

    #[tokio::test]
    async fn test_empty_stdout_reports_completion() {
        let runner = MockRunner::new(|| exited(0, "", "ignored"));
        let dispatcher = Dispatcher::new(runner, "glab");

        let text = dispatcher
            .invoke("issue_reopen", &args(json!({"issue_id": 1})))
            .await
            .unwrap();
        assert_eq!(text, EMPTY_SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn test_failure_with_stderr() {
        let runner = MockRunner::new(|| exited(1, "partial", "404 Not Found"));
        let dispatcher = Dispatcher::new(runner, "glab");

        let err = dispatcher
            .invoke("issue_view", &args(json!({"issue_id": 99})))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "404 Not Found");
    }

    #[tokio::test]
    async fn test_failure_without_stderr() {
        let runner = MockRunner::new(|| exited(1, "", ""));
        let dispatcher = Dispatcher::new(runner, "/usr/bin/glab");

        let err = dispatcher
            .invoke("issue_list", &Map::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "/usr/bin/glab exited with code 1");
    }

    #[tokio::test]
    async fn test_spawn_failure() {
        let runner = MockRunner::new(|| {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory (os error 2)",
            ))
        });
        let dispatcher = Dispatcher::new(runner, "glab");

        let err = dispatcher
            .invoke("issue_list", &Map::new())
            .await
            .unwrap_err();
        assert!(matches!(err, GitlabMcpError::Spawn { .. }));
        assert_eq!(err.to_string(), "No such file or directory (os error 2)");
    }

    #[tokio::test]
    async fn test_rejected_calls_never_spawn() {
        let runner = MockRunner::new(|| exited(0, "should not run", ""));
        let dispatcher = Dispatcher::new(runner.clone(), "glab");

        let err = dispatcher
            .invoke("issue_delete", &Map::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown tool: issue_delete");

        let err = dispatcher
            .invoke("issue_note", &args(json!({"issue_id": 1})))
            .await
            .unwrap_err();
        assert!(matches!(err, GitlabMcpError::MissingArgument { .. }));

        let err = dispatcher
            .invoke("issue_list", &args(json!({"state": "merged"})))
            .await
            .unwrap_err();
        assert!(matches!(err, GitlabMcpError::InvalidArgument { .. }));

        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn test_plan_matches_invocation() {
        let runner = MockRunner::new(|| exited(0, "ok", ""));
        let dispatcher = Dispatcher::new(runner.clone(), "glab");
        let call = args(json!({"title": "Bug", "labels": "bug"}));

        let planned = dispatcher.plan("issue_create", &call).unwrap();
        dispatcher.invoke("issue_create", &call).await.unwrap();

        assert_eq!(runner.calls()[0].1, planned);
    }

    #[test]
    fn test_list_tools_is_idempotent() {
        let dispatcher = Dispatcher::from_config(&Config::default());
        let first: Vec<_> = dispatcher.list_tools().iter().map(|t| t.name).collect();
        let second: Vec<_> = dispatcher.list_tools().iter().map(|t| t.name).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
        assert_eq!(dispatcher.program(), "glab");
    }

    /// Sleeps for the issue number in milliseconds and echoes its arguments
    struct SlowEchoRunner;

    #[async_trait]
    impl CommandRunner for SlowEchoRunner {
        async fn run(&self, _program: &str, args: &[String]) -> io::Result<CommandOutput> {
            let id: u64 = args[2].parse().unwrap();
            tokio::time::sleep(Duration::from_millis(id)).await;
            exited(0, &args.join(" "), "")
        }
    }

    #[tokio::test]
    async fn test_concurrent_calls_are_independent() {
        let dispatcher = Dispatcher::new(Arc::new(SlowEchoRunner), "glab");
        let slow = args(json!({"issue_id": 50, "comments": true}));
        let fast = args(json!({"issue_id": 1, "repo": "a/b"}));

        let (view, close) = tokio::join!(
            dispatcher.invoke("issue_view", &slow),
            dispatcher.invoke("issue_close", &fast)
        );

        assert_eq!(view.unwrap(), "issue view 50 --comments");
        assert_eq!(close.unwrap(), "issue close 1 -R a/b");
    }
}
