//! Core types shared by every linter adapter

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Error types for linter operations
#[derive(Debug, Error)]
pub enum LintError {
    /// A prerequisite program is missing. Raised before any linting happens.
    #[error("{component} is not installed")]
    Setup { component: String },
    #[error("Failed to parse {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to execute '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl LintError {
    pub(crate) fn setup(component: impl Into<String>) -> Self {
        Self::Setup {
            component: component.into(),
        }
    }

    pub(crate) fn parse(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }
}

/// Result type alias for linter operations
pub type Result<T> = std::result::Result<T, LintError>;

/// Raw output of a single lint command, or the aggregate of several
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: Option<String>,
}

impl CommandOutput {
    pub fn new(status: i32, stdout: impl Into<String>, stderr: Option<String>) -> Self {
        Self {
            status,
            stdout: stdout.into(),
            stderr,
        }
    }

    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// A single line-level issue reported by a linter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Path relative to the linted directory
    pub path: String,
    pub first_line: u64,
    pub last_line: u64,
    pub message: String,
}

impl Violation {
    /// Create a violation spanning a single line
    pub fn single_line(path: impl Into<String>, line: u64, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            first_line: line,
            last_line: line,
            message: message.into(),
        }
    }
}

/// Normalized outcome of a linting run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintResult {
    pub is_success: bool,
    pub warning: Vec<Violation>,
    pub error: Vec<Violation>,
}

impl LintResult {
    /// Create an empty, unsuccessful result
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of violations across both severities
    pub fn len(&self) -> usize {
        self.warning.len() + self.error.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warning.is_empty() && self.error.is_empty()
    }
}
