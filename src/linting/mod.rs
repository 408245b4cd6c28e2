//! Linting integration for external linters

use crate::core::{CommandOutput, LintResult, Result};
use std::path::Path;

pub mod eslint;

pub use eslint::{Eslint, EslintFileReport, EslintMessage, CONFIG_FILE_NAME};

/// An adapter around an external linting program
pub trait Linter {
    /// Human-readable linter name
    fn name(&self) -> &str;

    /// Fail with [`crate::LintError::Setup`] if a required program is missing
    fn verify_setup(&self, dir: &Path) -> Result<()>;

    /// Run the linter over `dir` and return its raw output
    fn lint(
        &self,
        dir: &Path,
        extensions: &[String],
        args: &str,
        fix: bool,
    ) -> Result<CommandOutput>;

    /// Turn raw linter output into a normalized result
    fn parse_output(&self, dir: &Path, output: &CommandOutput) -> Result<LintResult>;

    /// Lint `dir` and parse the output in one step
    fn run(&self, dir: &Path, extensions: &[String], args: &str, fix: bool) -> Result<LintResult> {
        let output = self.lint(dir, extensions, args, fix)?;
        self.parse_output(dir, &output)
    }
}
