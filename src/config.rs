//! Configuration file handling
//!
//! Lookout reads `config.toml` from the platform config directory
//! (`~/.config/lookout/` on Linux). Every field has a default so a missing
//! or partial file always produces a usable configuration; CLI flags
//! override whatever the file says.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::list::ListKnobs;

/// Default gateway endpoint
pub const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:5000";

/// Complete lookout configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookoutConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub tui: TuiConfig,
}

/// Gateway connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_gateway_url")]
    pub url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            url: default_gateway_url(),
        }
    }
}

fn default_gateway_url() -> String {
    DEFAULT_GATEWAY_URL.to_string()
}

/// List engine tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Rows per fetch/page (clamped to 1..=100 by the engine)
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Collection size above which lists render windowed
    #[serde(default = "default_threshold")]
    pub virtualization_threshold: usize,
    /// Extra rows rendered beyond each viewport edge
    #[serde(default = "default_overscan")]
    pub overscan: usize,
    /// Estimated row height in terminal cells
    #[serde(default = "default_row_height")]
    pub row_height: u32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            virtualization_threshold: default_threshold(),
            overscan: default_overscan(),
            row_height: default_row_height(),
        }
    }
}

impl ListConfig {
    pub fn knobs(&self) -> ListKnobs {
        ListKnobs {
            page_size: self.page_size,
            virtualization_threshold: self.virtualization_threshold,
            overscan: self.overscan,
            row_height: self.row_height,
        }
    }
}

fn default_page_size() -> usize {
    50
}

fn default_threshold() -> usize {
    crate::list::DEFAULT_VIRTUALIZATION_THRESHOLD
}

fn default_overscan() -> usize {
    5
}

fn default_row_height() -> u32 {
    3
}

/// TUI settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TuiConfig {
    #[serde(default)]
    pub theme: TuiTheme,
}

/// Built-in theme selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TuiTheme {
    #[default]
    Mocha,
    Dracula,
    Nord,
}

impl LookoutConfig {
    /// Path of the config file under the platform config dir
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("lookout").join("config.toml"))
    }

    pub fn exists() -> bool {
        Self::path().is_some_and(|p| p.exists())
    }

    /// Load from the default location; missing file yields defaults.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config at {}", path.display()))
    }

    /// Write to the default location, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::path().context("no config directory available")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path, raw).with_context(|| format!("failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LookoutConfig::default();
        assert_eq!(config.gateway.url, DEFAULT_GATEWAY_URL);
        assert_eq!(config.list.page_size, 50);
        assert_eq!(config.list.virtualization_threshold, 50);
        assert_eq!(config.list.overscan, 5);
        assert_eq!(config.list.row_height, 3);
        assert_eq!(config.tui.theme, TuiTheme::Mocha);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: LookoutConfig = toml::from_str(
            r#"
            [gateway]
            url = "http://nvr.local:5000"

            [list]
            page_size = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.gateway.url, "http://nvr.local:5000");
        assert_eq!(config.list.page_size, 25);
        assert_eq!(config.list.overscan, 5);
        assert_eq!(config.tui.theme, TuiTheme::Mocha);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = LookoutConfig::default();
        config.gateway.url = "http://nvr.local:5000".to_string();
        config.list.virtualization_threshold = 100;
        config.tui.theme = TuiTheme::Nord;
        config.save_to(&path).unwrap();

        let loaded = LookoutConfig::load_from(&path).unwrap();
        assert_eq!(loaded.gateway.url, "http://nvr.local:5000");
        assert_eq!(loaded.list.virtualization_threshold, 100);
        assert_eq!(loaded.tui.theme, TuiTheme::Nord);
    }
}
