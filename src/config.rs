//! Optional project configuration, read from `hitos.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "hitos.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageConfig {
    /// Page title; wins over the calendar's own `titulo`.
    #[serde(default)]
    pub title: Option<String>,
    /// Output directory of `build`.
    #[serde(default)]
    pub output: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// Data source used when a command gets no explicit argument.
    #[serde(default)]
    pub source: Option<String>,
}

impl Config {
    /// Read `hitos.toml` from the given directory. A missing file is not
    /// an error; a malformed one is.
    pub fn load(dir: &Path) -> Result<Option<Config>> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(Some(config))
    }

    /// Config of the working directory, defaulted when absent.
    pub fn load_current_dir() -> Result<Config> {
        Ok(Self::load(Path::new("."))?.unwrap_or_default())
    }
}
