//! Configuration for the ESLint adapter
//!
//! Settings come from an optional TOML file with an `[eslint]` section. Command
//! line flags are applied on top by the binary.

use crate::core::{LintError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Config file consulted when no explicit path is given
pub const DEFAULT_CONFIG_PATH: &str = "config/eslint-bridge.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EslintConfig {
    /// File extensions to lint, with or without the leading dot
    pub extensions: Vec<String>,
    /// Extra arguments appended to every ESLint invocation
    pub args: String,
    /// Pass `--fix` to ESLint
    pub fix: bool,
    /// Package manager whose presence is required (`npm`)
    pub package_manager: String,
    /// Package runner used to launch ESLint (`npx`)
    pub package_runner: String,
}

impl Default for EslintConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["js".to_string()],
            args: String::new(),
            fix: false,
            package_manager: "npm".to_string(),
            package_runner: "npx".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub eslint: EslintConfig,
}

impl BridgeConfig {
    /// Load configuration.
    ///
    /// With `Some(path)` the file must exist and parse. With `None`,
    /// [`DEFAULT_CONFIG_PATH`] is read if present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|e| LintError::Config {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                Self::from_toml_str(&content, path)
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                match fs::read_to_string(path) {
                    Ok(content) => Self::from_toml_str(&content, path),
                    Err(_) => Ok(Self::default()),
                }
            }
        }
    }

    /// Parse configuration from TOML text; `origin` is only used in errors
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| LintError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }
}
