//! Configuration for the content store.
//!
//! Configuration sources (highest priority first):
//! 1. Command-line flags (applied by the CLI on top of the resolved config)
//! 2. Environment variables (PORTFOLIO_CONTENT_DIR, PORTFOLIO_STRICT_LINTS)
//! 3. Config file (.portfolio/config.yaml)
//! 4. Defaults (bundled content, lenient lints, pretty export)
//!
//! Config file discovery:
//! - Searches current directory and parents for .portfolio/config.yaml
//! - Falls back to ~/.portfolio/config.yaml
//! - Paths in config file are relative to the directory holding .portfolio/

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::core::LoadOptions;

pub const ENV_CONTENT_DIR: &str = "PORTFOLIO_CONTENT_DIR";
pub const ENV_STRICT_LINTS: &str = "PORTFOLIO_STRICT_LINTS";

const CONFIG_DIR: &str = ".portfolio";
const CONFIG_FILE: &str = "config.yaml";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub lints: LintsConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentConfig {
    /// Content directory (relative to the project root)
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LintsConfig {
    /// Fail the load on any lint finding
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportConfig {
    /// Pretty-print exported JSON
    pub pretty: Option<bool>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Content directory; `None` means the bundled content
    pub content_dir: Option<PathBuf>,
    /// Treat lint findings as fatal
    pub strict_lints: bool,
    /// Pretty-print exported JSON
    pub pretty_export: bool,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            content_dir: None,
            strict_lints: false,
            pretty_export: true,
            config_file: None,
        }
    }
}

impl ResolvedConfig {
    /// Options for loading the store
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            strict_lints: self.strict_lints,
        }
    }

    /// Override the content directory
    pub fn with_content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_dir = Some(dir.into());
        self
    }
}

/// Find config file by searching `start` and its parents, then `home`
fn find_config_file(start: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let home_config = home?.join(CONFIG_DIR).join(CONFIG_FILE);
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Interpret a boolean environment value
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Load configuration starting the file search at `start` (falling back to
/// `home`), reading environment values through `env`
fn load_config_from(
    start: &Path,
    home: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig> {
    let config_file = find_config_file(start, home);
    let mut resolved = ResolvedConfig::default();

    if let Some(ref config_path) = config_file {
        debug!("Using config file {}", config_path.display());
        let config = load_config_file(config_path)?;

        // Base directory is the parent of .portfolio/ (i.e., grandparent of config.yaml)
        let base_dir = config_path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."));

        resolved.content_dir = config.content.dir.as_deref().map(|dir| resolve_path(base_dir, dir));
        resolved.strict_lints = config.lints.strict.unwrap_or(false);
        resolved.pretty_export = config.export.pretty.unwrap_or(true);
    }

    if let Some(dir) = env(ENV_CONTENT_DIR).filter(|d| !d.trim().is_empty()) {
        resolved.content_dir = Some(PathBuf::from(dir));
    }

    if let Some(raw) = env(ENV_STRICT_LINTS) {
        resolved.strict_lints = parse_bool(&raw)
            .with_context(|| format!("Invalid boolean in {}: {:?}", ENV_STRICT_LINTS, raw))?;
    }

    resolved.config_file = config_file;
    Ok(resolved)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let home = dirs::home_dir();
    load_config_from(&cwd, home.as_deref(), |key| std::env::var(key).ok())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (bypasses the cache)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
