use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_scheme() -> String {
    "http".to_string()
}

/// Global configuration loaded from `~/.config/rlg/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RlgConfig {
    /// Scheme prepended to URLs that carry no "://" separator.
    #[serde(default = "default_scheme")]
    pub default_scheme: String,
    /// Default source column name; first column is used when absent.
    #[serde(default)]
    pub source_column: Option<String>,
    /// Default target column name; second column is used when absent.
    #[serde(default)]
    pub target_column: Option<String>,
    /// Default status column name; third column (if any) is used when absent.
    #[serde(default)]
    pub status_column: Option<String>,
}

impl Default for RlgConfig {
    fn default() -> Self {
        Self {
            default_scheme: default_scheme(),
            source_column: None,
            target_column: None,
            status_column: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rlg")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RlgConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RlgConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RlgConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = RlgConfig::default();
        assert_eq!(cfg.default_scheme, "http");
        assert!(cfg.source_column.is_none());
        assert!(cfg.target_column.is_none());
        assert!(cfg.status_column.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = RlgConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: RlgConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.default_scheme, cfg.default_scheme);
        assert_eq!(parsed.source_column, cfg.source_column);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: RlgConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.default_scheme, "http");
        assert!(cfg.status_column.is_none());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            default_scheme = "https"
            source_column = "Source URLs"
            target_column = "Target URLs"
            status_column = "Status"
        "#;
        let cfg: RlgConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.default_scheme, "https");
        assert_eq!(cfg.source_column.as_deref(), Some("Source URLs"));
        assert_eq!(cfg.target_column.as_deref(), Some("Target URLs"));
        assert_eq!(cfg.status_column.as_deref(), Some("Status"));
    }
}
