//! Configuration management for `issue_cache`.
//!
//! Layers, lowest precedence first:
//! - Built-in defaults
//! - YAML file (`--config`, else `.icache.yaml` in the working directory)
//! - Environment variable overrides (`ICACHE_*`)
//! - Command-line overrides

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CacheError, Result};

/// Config file picked up from the working directory when present.
pub const CONFIG_FILE_NAME: &str = ".icache.yaml";
pub const ENV_ISSUES_FILE: &str = "ICACHE_ISSUES_FILE";
pub const ENV_PRETTY: &str = "ICACHE_PRETTY";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Issue dump to read when `--file` is not given.
    pub issues_file: Option<PathBuf>,
    /// Pretty-print JSON output.
    pub pretty: bool,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            issues_file: None,
            pretty: true,
            log_format: LogFormat::Text,
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config: Option<PathBuf>,
    pub file: Option<PathBuf>,
    pub compact: bool,
}

/// Load configuration from all layers.
///
/// # Errors
///
/// Returns `FileNotFound` if an explicit `--config` file is missing, or
/// `Config` if a file or environment value cannot be parsed.
pub fn load(cli: &CliOverrides) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => read_config_file(path)?,
        None => {
            let default_path = Path::new(CONFIG_FILE_NAME);
            if default_path.is_file() {
                read_config_file(default_path)?
            } else {
                Config::default()
            }
        }
    };
    apply_env(&mut config, |key| std::env::var(key).ok())?;
    apply_overrides(&mut config, cli);
    Ok(config)
}

/// Read a YAML config file.
///
/// # Errors
///
/// Returns `FileNotFound`, `Io`, or `Config` on malformed YAML.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CacheError::FileNotFound(path.to_path_buf())
        } else {
            CacheError::Io(e)
        }
    })?;
    parse_config(&contents).map_err(|e| CacheError::config(format!("{}: {e}", path.display())))
}

fn parse_config(contents: &str) -> std::result::Result<Config, String> {
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(contents).map_err(|e| e.to_string())
}

/// Apply `ICACHE_*` environment overrides using `lookup`.
///
/// # Errors
///
/// Returns `Config` if `ICACHE_PRETTY` is not a boolean.
pub fn apply_env<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(file) = lookup(ENV_ISSUES_FILE).filter(|v| !v.trim().is_empty()) {
        config.issues_file = Some(PathBuf::from(file));
    }
    if let Some(raw) = lookup(ENV_PRETTY) {
        config.pretty = parse_bool(&raw).ok_or_else(|| {
            CacheError::config(format!("{ENV_PRETTY}: expected a boolean, got '{raw}'"))
        })?;
    }
    Ok(())
}

/// Apply command-line overrides.
pub fn apply_overrides(config: &mut Config, cli: &CliOverrides) {
    if let Some(file) = &cli.file {
        config.issues_file = Some(file.clone());
    }
    if cli.compact {
        config.pretty = false;
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
