use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "interface-audit.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Exclusion globs applied to every scanned class
    #[serde(default)]
    pub exclusions: Vec<String>,

    /// Default directory searched for compiled classes
    pub classes: Option<String>,

    /// Output format (json, table)
    pub format: Option<String>,

    /// Fail the build on violations
    pub fail_on_violations: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exclusions: Vec::new(),
            classes: None,
            format: Some("table".to_string()),
            fail_on_violations: Some(true),
        }
    }
}

/// Load configuration from interface-audit.toml in the current directory.
/// A missing file yields the defaults; a malformed file is an error.
pub fn load_config() -> Result<Config> {
    let config_path = std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(CONFIG_FILE);

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    Ok(config)
}
