use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use wager_ledger::LedgerError;
use wager_types::Language;

use crate::cli::Cli;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "wager.toml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Bet sheet to load.
    pub data_path: PathBuf,
    /// Display language tag.
    pub language: String,
    /// Symbol prefixed to monetary amounts.
    pub currency: String,
    /// Directory that proof image references resolve against. When unset,
    /// images are not checked.
    pub images_root: Option<PathBuf>,
    /// Credited next to the dashboard title.
    pub author: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/bets.toml"),
            language: Language::default().tag().to_string(),
            currency: "€".into(),
            images_root: None,
            author: None,
        }
    }
}

impl DashboardConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// File configuration (explicit, or `wager.toml` if present) with
    /// command-line overrides applied.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_overrides(cli);
        Ok(config)
    }

    fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(data) = &cli.data {
            self.data_path = data.clone();
        }
        if let Some(lang) = &cli.lang {
            self.language = lang.clone();
        }
    }

    pub fn language(&self) -> Result<Language, LedgerError> {
        wager_ledger::parse_language(&self.language)
    }
}
