//! Running the external program
//!
//! The program is started directly with an argument vector, never through a
//! shell. The child inherits the server's environment and working directory,
//! reads from a null stdin and has both output streams captured in full.

use async_trait::async_trait;
use std::io;
use std::process::Stdio;
use tokio::process::Command;

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `-1` when the process was terminated by a signal
    pub code: i32,
    /// Standard output, lossily decoded as UTF-8
    pub stdout: String,
    /// Standard error, lossily decoded as UTF-8
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the process exited with status zero
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Something that can run a program to completion
///
/// An `Err` means the process could not be started at all; a process that
/// starts and fails is an `Ok` with a nonzero code.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` and wait for it to exit
    async fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}

/// Runs the configured program as a real child process
#[derive(Debug, Clone, Copy, Default)]
pub struct GlabRunner;

#[async_trait]
impl CommandRunner for GlabRunner {
    async fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(Stdio::null());

        let output = cmd.output().await?;

        Ok(CommandOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[tokio::test]
    async fn test_captures_stdout_and_code() {
        let output = GlabRunner
            .run("sh", &sh("printf 'hello'; printf 'warn' >&2"))
            .await
            .unwrap();
        assert!(output.success());
        assert_eq!(output.stdout, "hello");
        assert_eq!(output.stderr, "warn");
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_not_an_error() {
        let output = GlabRunner.run("sh", &sh("exit 3")).await.unwrap();
        assert_eq!(output.code, 3);
        assert!(!output.success());
        assert!(output.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_arguments_are_not_interpreted() {
        let args = vec!["$HOME; echo injected".to_string()];
        let output = GlabRunner.run("echo", &args).await.unwrap();
        assert_eq!(output.stdout, "$HOME; echo injected\n");
    }

    #[tokio::test]
    async fn test_stdin_is_empty() {
        let output = GlabRunner.run("cat", &[]).await.unwrap();
        assert!(output.success());
        assert!(output.stdout.is_empty());
    }

    #[tokio::test]
    async fn test_signal_exit_reports_minus_one() {
        let output = GlabRunner.run("sh", &sh("kill -9 $$")).await.unwrap();
        assert_eq!(output.code, -1);
    }

    #[tokio::test]
    async fn test_missing_program_fails_to_spawn() {
        let err = GlabRunner
            .run("gitlab-mcp-definitely-missing-program", &[])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced() {
        let output = GlabRunner
            .run("sh", &sh("printf '\\377ok'"))
            .await
            .unwrap();
        assert!(output.stdout.ends_with("ok"));
        assert!(output.stdout.contains('\u{FFFD}'));
    }
}
