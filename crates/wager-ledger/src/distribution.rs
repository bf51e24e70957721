//! Chart-ready groupings over derived records.

use serde::{Deserialize, Serialize};
use wager_types::money::percentage;

use crate::localize::DerivedRecord;
use crate::statistics::LedgerStatistics;

/// Labels longer than this are shortened for chart axes.
const DISPLAY_NAME_LIMIT: usize = 15;

/// Number of bets placed with a given (localized) label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetTypeCount {
    /// Full label.
    pub label: String,
    /// Label shortened for chart axes.
    pub display_name: String,
    pub count: usize,
}

/// Bet counts per label, in order of first appearance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetTypeBreakdown {
    pub entries: Vec<BetTypeCount>,
}

impl BetTypeBreakdown {
    pub fn from_records(records: &[DerivedRecord]) -> Self {
        let mut entries: Vec<BetTypeCount> = Vec::new();
        for record in records {
            match entries.iter_mut().find(|e| e.label == record.bet_label) {
                Some(entry) => entry.count += 1,
                None => entries.push(BetTypeCount {
                    label: record.bet_label.clone(),
                    display_name: display_name(&record.bet_label),
                    count: 1,
                }),
            }
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Truncate to the display limit in characters, marking the cut with `...`.
fn display_name(label: &str) -> String {
    if label.chars().count() > DISPLAY_NAME_LIMIT {
        let head: String = label.chars().take(DISPLAY_NAME_LIMIT).collect();
        format!("{head}...")
    } else {
        label.to_string()
    }
}

/// Wins versus losses, for the distribution pie.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutcomeSplit {
    pub wins: usize,
    pub losses: usize,
    /// Percentage of bets won; `None` for an empty ledger.
    pub win_share: Option<f64>,
    /// Percentage of bets lost; `None` for an empty ledger.
    pub loss_share: Option<f64>,
}

impl OutcomeSplit {
    pub fn from_stats(stats: &LedgerStatistics) -> Self {
        let total = stats.total_bets as f64;
        Self {
            wins: stats.win_count,
            losses: stats.loss_count,
            win_share: percentage(stats.win_count as f64, total),
            loss_share: percentage(stats.loss_count as f64, total),
        }
    }
}
