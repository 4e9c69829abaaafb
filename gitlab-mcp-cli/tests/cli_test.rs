//! Integration tests for the gitlab-mcp command line

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;


/// The binary, isolated from any configuration on the host
fn gitlab_mcp(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gitlab-mcp").unwrap();
    cmd.current_dir(workdir.path())
        .env("HOME", workdir.path())
        .env_remove("GITLAB_MCP_PROGRAM")
        .env_remove("GITLAB_MCP_LOG_FILE")
        .env_remove("GITLAB_MCP_LOG");
    cmd
}

#[test]
fn test_list_table() {
    let dir = TempDir::new().unwrap();
    gitlab_mcp(&dir)
        .args(["--quiet", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("issue_list"))
        .stdout(predicate::str::contains("issue_note"))
        .stdout(predicate::str::contains("Add a comment/note to an issue"));
}

#[test]
fn test_list_json() {
    let dir = TempDir::new().unwrap();
    let output = gitlab_mcp(&dir)
        .args(["--quiet", "list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let tools: Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<_> = tools
        .as_array()
        .unwrap()
        .iter()
        .map(|tool| tool["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        [
            "issue_list",
            "issue_view",
            "issue_create",
            "issue_update",
            "issue_close",
            "issue_reopen",
            "issue_note"
        ]
    );
}

#[test]
fn test_call_dry_run_prints_argv() {
    let dir = TempDir::new().unwrap();
    gitlab_mcp(&dir)
        .args([
            "--quiet",
            "call",
            "issue_view",
            "--args",
            r#"{"issue_id": 42, "repo": "a/b", "comments": true}"#,
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(concat!(
            r#"["glab","issue","view","42","-R","a/b","--comments"]"#,
            "\n"
        ));
}

#[test]
fn test_call_dry_run_uses_program_flag() {
    let dir = TempDir::new().unwrap();
    gitlab_mcp(&dir)
        .args([
            "--quiet",
            "--program",
            "/opt/bin/glab",
            "call",
            "issue_create",
            "--args",
            r#"{"title": "Bug; rm -rf /"}"#,
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r#"["/opt/bin/glab","issue","create","--title","Bug; rm -rf /","--yes"]"#,
        ));
}

#[test]
fn test_call_invalid_json_exits_2() {
    let dir = TempDir::new().unwrap();
    gitlab_mcp(&dir)
        .args(["--quiet", "call", "issue_list", "--args", "{state:"])
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn test_call_unknown_tool_exits_2() {
    let dir = TempDir::new().unwrap();
    gitlab_mcp(&dir)
        .args(["--quiet", "call", "issue_delete"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown tool: issue_delete"));
}

#[test]
fn test_call_missing_program_exits_1() {
    let dir = TempDir::new().unwrap();
    gitlab_mcp(&dir)
        .args([
            "--quiet",
            "--program",
            "gitlab-mcp-test-no-such-program",
            "call",
            "issue_list",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn test_blank_program_is_rejected() {
    let dir = TempDir::new().unwrap();
    gitlab_mcp(&dir)
        .args(["--quiet", "--program", " ", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'program'"));
}

#[test]
fn test_program_from_yaml_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("gitlab-mcp.yaml"), "program: /srv/glab\n").unwrap();

    gitlab_mcp(&dir)
        .args(["--quiet", "call", "issue_close", "--args", r#"{"issue_id": 1}"#, "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"["/srv/glab","issue","close","1"]"#));
}

#[test]
fn test_invalid_yaml_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("gitlab-mcp.yaml"), "program: [unclosed\n").unwrap();

    let output = gitlab_mcp(&dir)
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Ignoring configuration file"), "stderr: {stderr}");
    assert!(stderr.contains("gitlab-mcp.yaml"), "stderr: {stderr}");
    serde_json::from_slice::<Value>(&output.stdout).unwrap();
}

#[test]
fn test_log_file_flag_receives_config_warning() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("gitlab-mcp.yaml"), "program: [unclosed\n").unwrap();
    let log_file = dir.path().join("mcp.log");

    gitlab_mcp(&dir)
        .arg("--log-file")
        .arg(&log_file)
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Ignoring configuration file").not());

    let log = std::fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("Ignoring configuration file"), "log: {log}");
}

#[test]
fn test_completion_dir_writes_every_shell() {
    let dir = TempDir::new().unwrap();
    let outdir = dir.path().join("completions");

    gitlab_mcp(&dir)
        .arg("--quiet")
        .arg("completion")
        .arg("--dir")
        .arg(&outdir)
        .assert()
        .success();

    assert!(outdir.join("gitlab-mcp.bash").is_file());
    assert!(outdir.join("_gitlab-mcp").is_file());
    assert!(outdir.join("gitlab-mcp.fish").is_file());
    assert!(outdir.join("_gitlab-mcp.ps1").is_file());
}

#[test]
fn test_completion_bash() {
    let dir = TempDir::new().unwrap();
    gitlab_mcp(&dir)
        .args(["--quiet", "completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gitlab-mcp"));
}

#[cfg(unix)]
mod with_fake_glab {
    use super::*;
    use test_utils::FakeGlab;

    #[test]
    fn test_call_prints_program_output() {
        let dir = TempDir::new().unwrap();
        let glab = FakeGlab::new();
        gitlab_mcp(&dir)
            .env("GITLAB_MCP_PROGRAM", glab.program())
            .args([
                "--quiet",
                "call",
                "issue_note",
                "--args",
                r#"{"issue_id": 7, "message": "two words"}"#,
            ])
            .assert()
            .success()
            .stdout("issue\nnote\n7\n--message\ntwo words\n");
    }

    #[test]
    fn test_call_silent_success() {
        let dir = TempDir::new().unwrap();
        let glab = FakeGlab::new();
        gitlab_mcp(&dir)
            .args(["--quiet", "--program", glab.program(), "call", "issue_close"])
            .args(["--args", r#"{"issue_id": 3}"#])
            .assert()
            .success()
            .stdout("Command completed successfully\n");
    }

    #[test]
    fn test_call_failure_relays_stderr() {
        let dir = TempDir::new().unwrap();
        let glab = FakeGlab::new();
        gitlab_mcp(&dir)
            .args(["--quiet", "--program", glab.program(), "call", "issue_view"])
            .args(["--args", r#"{"issue_id": 404}"#])
            .assert()
            .code(1)
            .stderr("Error: 404 Not Found\n");
    }
}
