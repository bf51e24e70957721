use serde::{Deserialize, Serialize};
use tracing::debug;
use wager_types::{BetRecord, Language};

use crate::accumulate::accumulate;
use crate::chronology::sort_chronologically;
use crate::distribution::{BetTypeBreakdown, OutcomeSplit};
use crate::error::Result;
use crate::localize::{parse_language, DerivedRecord, LabelCatalog, Localizer};
use crate::statistics::LedgerStatistics;
use crate::validation::RecordValidator;

/// A fully derived ledger: ordered display rows plus aggregates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub language: Language,
    pub records: Vec<DerivedRecord>,
    pub stats: LedgerStatistics,
}

/// One point of a trend chart, keyed by the short date token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub short_date: String,
    pub value: f64,
}

impl Ledger {
    /// Running profit after each bet.
    pub fn cumulative_series(&self) -> Vec<SeriesPoint> {
        self.series(|r| r.cumulative_profit)
    }

    /// Profit or loss of each individual bet.
    pub fn profit_series(&self) -> Vec<SeriesPoint> {
        self.series(|r| r.profit_loss)
    }

    pub fn bet_types(&self) -> BetTypeBreakdown {
        BetTypeBreakdown::from_records(&self.records)
    }

    pub fn outcome_split(&self) -> OutcomeSplit {
        OutcomeSplit::from_stats(&self.stats)
    }

    fn series(&self, value: impl Fn(&DerivedRecord) -> f64) -> Vec<SeriesPoint> {
        self.records
            .iter()
            .map(|r| SeriesPoint {
                short_date: r.short_date.clone(),
                value: value(r),
            })
            .collect()
    }
}

/// Runs the derivation pipeline against a label catalog.
///
/// Holds no state between calls: every derivation starts from the records
/// it is given.
#[derive(Clone, Debug, Default)]
pub struct LedgerDeriver {
    catalog: LabelCatalog,
}

impl LedgerDeriver {
    pub fn new(catalog: LabelCatalog) -> Self {
        Self { catalog }
    }

    /// Validate, sort, accumulate, localize, and reduce.
    ///
    /// Fails on the first data defect; no partial ledger is returned.
    pub fn derive(&self, records: &[BetRecord], language: Language) -> Result<Ledger> {
        RecordValidator::check(records)?;

        let sorted = sort_chronologically(records)?;
        let accumulated = accumulate(sorted);

        let localizer = Localizer::new(&self.catalog);
        let derived: Vec<DerivedRecord> = accumulated
            .iter()
            .map(|r| localizer.project(r, language))
            .collect();

        let stats = LedgerStatistics::from_lines(&derived);
        debug!(
            language = %language,
            records = derived.len(),
            total_profit = stats.total_profit,
            "ledger derived"
        );

        Ok(Ledger {
            language,
            records: derived,
            stats,
        })
    }

    /// Like [`Self::derive`], taking a raw language tag.
    ///
    /// The tag is checked before any record is looked at.
    pub fn derive_for_tag(&self, records: &[BetRecord], tag: &str) -> Result<Ledger> {
        let language = parse_language(tag)?;
        self.derive(records, language)
    }
}

/// Derive a ledger with the built-in label catalog.
pub fn derive_ledger(records: &[BetRecord], language: Language) -> Result<Ledger> {
    LedgerDeriver::default().derive(records, language)
}

/// Derive a ledger with the built-in catalog from a raw language tag.
pub fn derive_ledger_for_tag(records: &[BetRecord], tag: &str) -> Result<Ledger> {
    LedgerDeriver::default().derive_for_tag(records, tag)
}
