//! Process execution for linter commands
//!
//! Adapters never spawn processes directly. They go through a [`CommandRunner`],
//! which lets tests script linter behavior without the linter being installed.

use crate::core::{CommandOutput, LintError, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Executes external programs on behalf of a linter adapter
pub trait CommandRunner {
    /// Run `program` with `args` in `cwd`, blocking until it exits.
    ///
    /// A non-zero exit is not an error: it is reported through
    /// [`CommandOutput::status`]. Only a failure to start the process is.
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<CommandOutput>;

    /// Check whether `program` can be found on `PATH`
    fn command_exists(&self, program: &str) -> bool;
}

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| LintError::Spawn {
                program: display_command(program, args),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        // Killed by a signal: no exit code, but certainly not a success
        let status = output.status.code().unwrap_or(1);

        Ok(CommandOutput::new(status, stdout, Some(stderr)))
    }

    fn command_exists(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

/// Render a program and its arguments as a single shell-like line for logs
pub fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
