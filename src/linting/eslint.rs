//! ESLint adapter
//!
//! ESLint is launched through `npx` once per top-level entry of the linted
//! directory. Every invocation prints a JSON array of per-file reports; the
//! arrays are concatenated in enumeration order and handed to
//! [`Eslint::parse_output`] as a single [`CommandOutput`].

use crate::config::EslintConfig;
use crate::core::{CommandOutput, LintError, LintResult, Result, Violation};
use crate::execution::{display_command, CommandRunner, ProcessRunner};
use crate::linting::Linter;
use crate::utils::{extensions_arg, relative_path, remove_trailing_period, split_args};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// ESLint configuration file, never passed to ESLint as a lint target
pub const CONFIG_FILE_NAME: &str = ".eslintrc.json";

const SEVERITY_WARNING: i64 = 1;
const SEVERITY_ERROR: i64 = 2;

/// One entry of ESLint's `--format json` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EslintFileReport {
    /// Absolute path of the linted file
    pub file_path: String,
    #[serde(default)]
    pub messages: Vec<EslintMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EslintMessage {
    /// Missing for file-level messages such as "File ignored"
    #[serde(default)]
    pub line: Option<u64>,
    #[serde(default)]
    pub message: String,
    /// `null` for fatal parse errors
    #[serde(default)]
    pub rule_id: Option<String>,
    pub severity: i64,
}

impl EslintMessage {
    /// Message text with the trailing period removed and the rule appended.
    ///
    /// Messages without a rule id (fatal parse errors) get no suffix rather
    /// than a literal `(null)`.
    pub fn formatted(&self) -> String {
        let text = remove_trailing_period(&self.message);
        match &self.rule_id {
            Some(rule) => format!("{} ({})", text, rule),
            None => text.to_string(),
        }
    }
}

/// https://eslint.org
pub struct Eslint<R = ProcessRunner> {
    runner: R,
    package_manager: String,
    package_runner: String,
}

impl Eslint<ProcessRunner> {
    /// Create an adapter that spawns real processes
    pub fn new() -> Self {
        Self::with_runner(ProcessRunner::new())
    }
}

impl Default for Eslint<ProcessRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> Eslint<R> {
    /// Create an adapter that executes commands through `runner`
    pub fn with_runner(runner: R) -> Self {
        Self::from_config(&EslintConfig::default(), runner)
    }

    /// Create an adapter using the program names from `config`
    pub fn from_config(config: &EslintConfig, runner: R) -> Self {
        Self {
            runner,
            package_manager: config.package_manager.clone(),
            package_runner: config.package_runner.clone(),
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Arguments shared by every invocation, without the lint target
    fn base_args(&self, extensions: &[String], args: &str, fix: bool) -> Vec<String> {
        let mut cmd_args = vec![
            "--no-install".to_string(),
            "eslint".to_string(),
            "--ext".to_string(),
            extensions_arg(extensions),
        ];
        if fix {
            cmd_args.push("--fix".to_string());
        }
        cmd_args.extend(["--no-color", "--format", "json"].map(String::from));
        cmd_args.extend(split_args(args));
        cmd_args
    }
}

impl<R: CommandRunner> Linter for Eslint<R> {
    fn name(&self) -> &str {
        "ESLint"
    }

    fn verify_setup(&self, dir: &Path) -> Result<()> {
        if !self.runner.command_exists(&self.package_manager) {
            return Err(LintError::setup(self.package_manager.to_uppercase()));
        }

        let args = ["--no-install", "eslint", "-v"].map(String::from);
        match self.runner.run(&self.package_runner, &args, dir) {
            Ok(output) if output.success() => {
                debug!(version = %output.stdout.trim(), "ESLint is installed");
                Ok(())
            }
            Ok(output) => {
                debug!(status = output.status, "ESLint version probe failed");
                Err(LintError::setup(self.name()))
            }
            Err(e) => {
                debug!(error = %e, "ESLint version probe could not start");
                Err(LintError::setup(self.name()))
            }
        }
    }

    fn lint(
        &self,
        dir: &Path,
        extensions: &[String],
        args: &str,
        fix: bool,
    ) -> Result<CommandOutput> {
        let base_args = self.base_args(extensions, args, fix);

        let mut status = 0;
        let mut reports: Vec<serde_json::Value> = Vec::new();

        let entries = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in entries {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if name == CONFIG_FILE_NAME {
                continue;
            }

            // Directories are linted in place, everything else by name from `dir`
            let (target, cwd) = if entry.file_type().is_dir() {
                (".".to_string(), entry.path())
            } else {
                (name, dir)
            };

            let mut cmd_args = base_args.clone();
            cmd_args.push(target);

            info!(
                command = %display_command(&self.package_runner, &cmd_args),
                cwd = %cwd.display(),
                "running ESLint"
            );
            let output = self.runner.run(&self.package_runner, &cmd_args, cwd)?;

            if status == 0 && output.status != 0 {
                status = output.status;
            }

            debug!(stdout = %output.stdout, "ESLint stdout");
            if let Some(stderr) = output.stderr.as_deref().filter(|s| !s.trim().is_empty()) {
                debug!(stderr = %stderr, "ESLint stderr (discarded)");
            }

            let parsed: Vec<serde_json::Value> =
                serde_json::from_str(&output.stdout).map_err(|e| {
                    LintError::parse(
                        format!("ESLint output for {}", entry.path().display()),
                        e,
                    )
                })?;
            reports.extend(parsed);
        }

        let stdout = serde_json::to_string(&reports)
            .map_err(|e| LintError::parse("merged ESLint output", e))?;

        Ok(CommandOutput::new(status, stdout, None))
    }

    fn parse_output(&self, dir: &Path, output: &CommandOutput) -> Result<LintResult> {
        let mut lint_result = LintResult::new();
        lint_result.is_success = output.success();

        let reports: Vec<EslintFileReport> = serde_json::from_str(&output.stdout)
            .map_err(|e| LintError::parse("ESLint output", e))?;

        for report in reports {
            let path = relative_path(dir, &report.file_path);
            for msg in &report.messages {
                let line = msg.line.unwrap_or(1);
                let entry = Violation::single_line(path.clone(), line, msg.formatted());
                match msg.severity {
                    SEVERITY_WARNING => lint_result.warning.push(entry),
                    SEVERITY_ERROR => lint_result.error.push(entry),
                    other => warn!(
                        path = %path,
                        line,
                        severity = other,
                        "dropping ESLint message with unknown severity"
                    ),
                }
            }
        }

        Ok(lint_result)
    }
}
