use serde::{Deserialize, Serialize};
use wager_types::money::{percentage, round2};
use wager_types::{BetRecord, Outcome};

use crate::accumulate::AccumulatedRecord;
use crate::localize::DerivedRecord;

/// The numeric view of a ledger row that statistics are computed from.
///
/// Implemented for raw, accumulated and localized rows alike, since the
/// reduction never reads text fields.
pub trait StakeLine {
    fn stake(&self) -> f64;
    fn gains(&self) -> f64;
    fn outcome(&self) -> Outcome;
}

impl StakeLine for BetRecord {
    fn stake(&self) -> f64 {
        self.stake
    }
    fn gains(&self) -> f64 {
        self.gains
    }
    fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl StakeLine for AccumulatedRecord {
    fn stake(&self) -> f64 {
        self.record.stake
    }
    fn gains(&self) -> f64 {
        self.record.gains
    }
    fn outcome(&self) -> Outcome {
        self.record.outcome
    }
}

impl StakeLine for DerivedRecord {
    fn stake(&self) -> f64 {
        self.stake
    }
    fn gains(&self) -> f64 {
        self.gains
    }
    fn outcome(&self) -> Outcome {
        self.outcome
    }
}

/// Aggregate figures for a ledger.
///
/// `win_rate` and `roi` are `None` when their denominator is zero (no
/// bets, or nothing staked). Percentages and amounts are at two decimals.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerStatistics {
    pub total_bets: usize,
    pub win_count: usize,
    pub loss_count: usize,
    pub win_rate: Option<f64>,
    pub total_stake: f64,
    pub total_returns: f64,
    pub total_profit: f64,
    pub roi: Option<f64>,
}

impl LedgerStatistics {
    /// Reduce a sequence of rows into statistics.
    pub fn from_lines<'a, L, I>(lines: I) -> Self
    where
        L: StakeLine + 'a,
        I: IntoIterator<Item = &'a L>,
    {
        let mut total_bets = 0usize;
        let mut win_count = 0usize;
        let mut stake = 0.0;
        let mut returns = 0.0;

        for line in lines {
            total_bets += 1;
            if line.outcome().is_win() {
                win_count += 1;
            }
            stake += line.stake();
            returns += line.gains();
        }

        let total_stake = round2(stake);
        let total_returns = round2(returns);
        let total_profit = round2(total_returns - total_stake);

        Self {
            total_bets,
            win_count,
            loss_count: total_bets - win_count,
            win_rate: percentage(win_count as f64, total_bets as f64),
            total_stake,
            total_returns,
            total_profit,
            roi: percentage(total_profit, total_stake),
        }
    }

    /// Returns `true` if the ledger is at or above break-even.
    pub fn is_profitable(&self) -> bool {
        self.total_profit >= 0.0
    }
}
