//! Localization projection: source-locale records to display records.
//!
//! Bet labels are written in French in the log. The [`LabelCatalog`] maps
//! each canonical (French) label to its display text per language. The
//! catalog is incomplete by nature, so a missing entry falls back to the
//! original label instead of failing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wager_types::{CalendarDate, Language, Outcome, TypeError};

use crate::accumulate::AccumulatedRecord;
use crate::error::{LedgerError, Result};

/// Built-in English translations of the bet labels used in the log.
const ENGLISH_LABELS: &[(&str, &str)] = &[
    ("Résultat R. Madrid", "R. Madrid Win"),
    (
        "Double chance et nombre de buts R. Madrid/match nul et moins de 3,5",
        "Double chance R. Madrid/draw and under 3.5 goals",
    ),
    ("Les 2 équipes marquent Oui", "Both teams to score Yes"),
    ("Résultat Naples", "Napoli Win"),
];

/// Per-language lookup from canonical bet label to display text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelCatalog {
    tables: BTreeMap<Language, BTreeMap<String, String>>,
}

impl Default for LabelCatalog {
    fn default() -> Self {
        let mut catalog = Self::empty();
        catalog.extend(
            Language::En,
            ENGLISH_LABELS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        catalog
    }
}

impl LabelCatalog {
    /// A catalog with no entries; every label passes through unchanged.
    pub fn empty() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    /// Merge entries into a language's table. Later entries win.
    pub fn extend<I>(&mut self, language: Language, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.tables.entry(language).or_default().extend(entries);
    }

    /// Display text for `label`, or `label` itself when no entry exists.
    pub fn translate<'a>(&'a self, language: Language, label: &'a str) -> &'a str {
        self.tables
            .get(&language)
            .and_then(|table| table.get(label))
            .map(String::as_str)
            .unwrap_or(label)
    }

    /// Number of entries for a language.
    pub fn len(&self, language: Language) -> usize {
        self.tables.get(&language).map_or(0, BTreeMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.values().all(BTreeMap::is_empty)
    }
}

/// Parse a display language tag. An unsupported tag is a configuration
/// error.
pub fn parse_language(tag: &str) -> Result<Language> {
    tag.parse()
        .map_err(|_: TypeError| LedgerError::UnsupportedLanguage(tag.to_string()))
}

/// Display text for an outcome.
pub fn outcome_label(language: Language, outcome: Outcome) -> &'static str {
    match (language, outcome) {
        (Language::En, Outcome::Win) => "Win",
        (Language::En, Outcome::Loss) => "Loss",
        (Language::Fr, Outcome::Win) => "Gagné",
        (Language::Fr, Outcome::Loss) => "Perdu",
    }
}

/// A fully derived, display-ready ledger row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerivedRecord {
    pub date: CalendarDate,
    /// Date text in the display language.
    pub date_label: String,
    pub short_date: String,
    #[serde(rename = "match")]
    pub fixture: String,
    /// Bet label in the display language.
    pub bet_label: String,
    pub odds: f64,
    pub stake: f64,
    pub gains: f64,
    pub outcome: Outcome,
    /// Outcome text in the display language.
    pub outcome_label: String,
    pub profit_loss: f64,
    pub cumulative_profit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

/// Projects accumulated records into a display language.
#[derive(Clone, Copy, Debug)]
pub struct Localizer<'a> {
    catalog: &'a LabelCatalog,
}

impl<'a> Localizer<'a> {
    pub fn new(catalog: &'a LabelCatalog) -> Self {
        Self { catalog }
    }

    /// Produce the display row for `record` without touching it.
    ///
    /// English output also renders the month name in English; French, the
    /// source locale, keeps the date text as written.
    pub fn project(&self, record: &AccumulatedRecord, language: Language) -> DerivedRecord {
        let source = &record.record;
        let date_label = match language {
            Language::En => record.date.display(Language::En),
            Language::Fr => source.date.clone(),
        };

        DerivedRecord {
            date: record.date,
            date_label,
            short_date: source.short_date.clone(),
            fixture: source.fixture.clone(),
            bet_label: self.catalog.translate(language, &source.bet_label).to_string(),
            odds: source.odds,
            stake: source.stake,
            gains: source.gains,
            outcome: source.outcome,
            outcome_label: outcome_label(language, source.outcome).to_string(),
            profit_loss: record.profit_loss,
            cumulative_profit: record.cumulative_profit,
            image_ref: source.image_ref.clone(),
        }
    }
}
