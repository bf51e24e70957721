//! Bet sheets: the betting log as an injected data file.
//!
//! A sheet is TOML (`[[bets]]` tables plus optional `[translations.<tag>]`
//! label maps) or, for `.json` files, the same shape as JSON.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use wager_types::BetRecord;

use crate::error::{LedgerError, Result};
use crate::localize::{parse_language, LabelCatalog};

/// The raw contents of a bet sheet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BetSheet {
    #[serde(default)]
    pub bets: Vec<BetRecord>,
    /// Extra bet-label translations, keyed by language tag.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub translations: BTreeMap<String, BTreeMap<String, String>>,
}

impl BetSheet {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| LedgerError::Source(e.to_string()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| LedgerError::Source(e.to_string()))
    }

    /// Load a sheet, picking the format from the file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| LedgerError::Source(format!("{}: {e}", path.display())))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let sheet = if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
        .map_err(|e| match e {
            LedgerError::Source(msg) => LedgerError::Source(format!("{}: {msg}", path.display())),
            other => other,
        })?;

        info!(path = %path.display(), bets = sheet.bets.len(), "bet sheet loaded");
        Ok(sheet)
    }

    /// The built-in catalog extended with this sheet's translations.
    ///
    /// A translation table under an unsupported language tag is a
    /// configuration error.
    pub fn catalog(&self) -> Result<LabelCatalog> {
        let mut catalog = LabelCatalog::default();
        for (tag, entries) in &self.translations {
            let language = parse_language(tag)?;
            catalog.extend(
                language,
                entries.iter().map(|(k, v)| (k.clone(), v.clone())),
            );
        }
        Ok(catalog)
    }
}
