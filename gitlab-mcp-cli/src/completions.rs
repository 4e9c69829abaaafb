use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Binary name completions are generated for
pub const BIN_NAME: &str = "gitlab-mcp";

/// Generate completion scripts for every supported shell into `outdir`, creating it if needed
pub fn generate_completions<P: AsRef<Path>>(outdir: P) -> Result<Vec<PathBuf>> {
    let outdir = outdir.as_ref();
    std::fs::create_dir_all(outdir)?;
    let mut cmd = Cli::command();

    let mut written = Vec::new();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
        written.push(generate_to(shell, &mut cmd, BIN_NAME, outdir)?);
    }

    Ok(written)
}

/// Write the completion script for `shell` to `out`
pub fn write_completion<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, out);
}

/// Print shell completion script to stdout
pub fn print_completion(shell: Shell) -> Result<()> {
    let mut stdout = io::stdout();
    write_completion(shell, &mut stdout);
    stdout.flush()?;
    Ok(())
}
