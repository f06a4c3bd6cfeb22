//! Configuration loading
//!
//! `ordena.toml` controls which files the CLI visits; the pipeline itself
//! has no knobs, since every formatting decision mirrors the statement
//! being rewritten. Lookup order: an explicit `--config` path, the working
//! directory, then the user-level configuration directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use etcetera::{BaseStrategy, choose_base_strategy};
use log::debug;
use serde::Deserialize;

/// File-selection settings for the CLI walker
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File extensions eligible for import reordering
    pub extensions: Vec<String>,
    /// Directory names skipped during traversal
    pub skip: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: ["js", "jsx", "ts", "tsx", "mjs", "cjs", "mts", "cts"]
                .iter()
                .map(|ext| (*ext).to_owned())
                .collect(),
            skip: ["node_modules", ".git", "dist", "build"]
                .iter()
                .map(|dir| (*dir).to_owned())
                .collect(),
        }
    }
}

impl Config {
    /// Whether a path's extension is eligible for reordering
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }

    /// Whether a directory name is excluded from traversal
    pub fn skips_directory(&self, name: &str) -> bool {
        self.skip.iter().any(|skipped| skipped == name)
    }
}

/// Load configuration, falling back to defaults when no file is present
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return parse_file(path);
    }

    let local = PathBuf::from("ordena.toml");
    if local.is_file() {
        return parse_file(&local);
    }

    if let Some(user) = user_config_path()
        && user.is_file()
    {
        return parse_file(&user);
    }

    Ok(Config::default())
}

fn parse_file(path: &Path) -> Result<Config> {
    debug!("loading configuration from {}", path.display());
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration {}", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("invalid configuration in {}", path.display()))
}

fn user_config_path() -> Option<PathBuf> {
    choose_base_strategy()
        .ok()
        .map(|strategy| strategy.config_dir().join("ordena").join("ordena.toml"))
}
