// File: ./src/config.rs
use crate::model::Priority;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub seed_examples: bool,
    pub default_priority: Priority,
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_examples: true,
            default_priority: Priority::Medium,
            date_format: "%d.%m.%Y".to_string(),
        }
    }
}

impl Config {
    pub fn get_path() -> Option<PathBuf> {
        // ISOLATION: Check env var first
        if let Ok(dir) = env::var("LISTO_CONFIG_DIR") {
            return Some(PathBuf::from(dir).join("config.toml"));
        }
        ProjectDirs::from("com", "listo", "listo").map(|p| p.config_dir().join("config.toml"))
    }

    /// Loads the default config file. No file means default settings.
    pub fn load() -> Result<Self> {
        match Self::get_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_priority = \"high\"\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.default_priority, Priority::High);
        assert!(cfg.seed_examples);
        assert_eq!(cfg.date_format, "%d.%m.%Y");
    }

    #[test]
    fn full_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "seed_examples = false\ndefault_priority = \"low\"\ndate_format = \"%Y-%m-%d\"\n",
        )
        .unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(
            cfg,
            Config {
                seed_examples: false,
                default_priority: Priority::Low,
                date_format: "%Y-%m-%d".to_string(),
            }
        );
    }

    #[test]
    fn unknown_priority_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_priority = \"urgent\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }

    #[test]
    fn missing_file_is_an_error_for_explicit_paths() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load_from(&dir.path().join("nope.toml")).is_err());
    }
}
