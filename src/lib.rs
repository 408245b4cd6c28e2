//! # eslint-bridge
//!
//! Runs ESLint over a directory and normalizes its JSON output into a
//! [`LintResult`] of warnings and errors.
//!
//! ## Features
//!
//! - **Setup verification**: checks that the package manager and ESLint are installed
//! - **Per-entry linting**: one ESLint invocation per top-level directory entry,
//!   with failures tolerated and the outputs merged
//! - **Output parsing**: relative paths, rule-suffixed messages, severity routing
//! - **Fixtures**: a mock HTTP requester for tests of GitHub-facing code
//!
//! ## Usage
//!
//! ```rust,no_run
//! use eslint_bridge::{Eslint, Linter};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let eslint = Eslint::new();
//! let dir = Path::new("/path/to/project");
//! eslint.verify_setup(dir)?;
//! let result = eslint.run(dir, &["js".to_string()], "", false)?;
//! println!("{} errors, {} warnings", result.error.len(), result.warning.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod execution;
pub mod fixtures;
pub mod linting;
pub mod utils;

// Re-export main types
pub use config::{BridgeConfig, EslintConfig};
pub use self::core::{CommandOutput, LintError, LintResult, Result, Violation};
pub use execution::{CommandRunner, ProcessRunner};
pub use fixtures::{MockRequester, RequestError, Requester};
pub use linting::{Eslint, Linter};
