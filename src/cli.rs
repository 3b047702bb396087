// File: ./src/cli.rs
use crate::config::Config;
use crate::store::TaskStore;
use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "listo", version, about = "A small to-do list for the terminal")]
pub struct Cli {
    /// Read settings from this file instead of the default location
    #[arg(long, env = "LISTO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start with an empty list instead of the example tasks
    #[arg(long)]
    pub empty: bool,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    pub fn initial_store(&self, config: &Config, today: NaiveDate) -> TaskStore {
        if self.empty || !config.seed_examples {
            TaskStore::new()
        } else {
            TaskStore::with_examples(today)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 5).unwrap()
    }

    #[test]
    fn seeds_by_default() {
        let cli = Cli::try_parse_from(["listo"]).unwrap();
        assert!(!cli.empty);
        assert_eq!(cli.initial_store(&Config::default(), today()).len(), 4);
    }

    #[test]
    fn empty_flag_and_config_both_disable_seeding() {
        let cli = Cli::try_parse_from(["listo", "--empty"]).unwrap();
        assert!(cli.initial_store(&Config::default(), today()).is_empty());

        let cli = Cli::try_parse_from(["listo"]).unwrap();
        let cfg = Config {
            seed_examples: false,
            ..Config::default()
        };
        assert!(cli.initial_store(&cfg, today()).is_empty());
    }

    #[test]
    fn explicit_config_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "date_format = \"%Y/%m/%d\"\n").unwrap();
        let cli =
            Cli::try_parse_from(["listo", "--config", path.to_str().unwrap()]).unwrap();
        assert_eq!(cli.load_config().unwrap().date_format, "%Y/%m/%d");
    }
}
