use std::fmt;

use serde::{Deserialize, Serialize};

use crate::money::round2;

/// Result of a settled bet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(alias = "win")]
    Win,
    #[serde(alias = "loss")]
    Loss,
}

impl Outcome {
    /// The outcome implied by the returned amount: any positive return is a
    /// win, a zero return is a loss.
    pub fn from_gains(gains: f64) -> Self {
        if gains > 0.0 {
            Self::Win
        } else {
            Self::Loss
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Self::Win)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win => write!(f, "Win"),
            Self::Loss => write!(f, "Loss"),
        }
    }
}

/// One raw entry of the betting log.
///
/// Text fields are in the source locale. `profit_loss` and
/// `cumulative_profit` may be present in hand-written data but are never
/// authoritative: the ledger recomputes both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BetRecord {
    /// Source-locale date, e.g. `"16 avril 2025"`.
    pub date: String,
    /// Chart-axis token, e.g. `"16/04"`.
    #[serde(alias = "shortDate")]
    pub short_date: String,
    #[serde(rename = "match")]
    pub fixture: String,
    #[serde(alias = "bet", alias = "betLabel")]
    pub bet_label: String,
    pub odds: f64,
    pub stake: f64,
    pub gains: f64,
    #[serde(alias = "result")]
    pub outcome: Outcome,
    #[serde(default, alias = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    #[serde(
        default,
        rename = "profit_loss",
        alias = "profitLoss",
        skip_serializing_if = "Option::is_none"
    )]
    pub supplied_profit_loss: Option<f64>,
    #[serde(
        default,
        rename = "cumulative_profit",
        alias = "cumulativeProfit",
        skip_serializing_if = "Option::is_none"
    )]
    pub supplied_cumulative_profit: Option<f64>,
}

impl BetRecord {
    /// Build a record with the outcome derived from `gains`.
    pub fn new(
        date: impl Into<String>,
        short_date: impl Into<String>,
        fixture: impl Into<String>,
        bet_label: impl Into<String>,
        odds: f64,
        stake: f64,
        gains: f64,
    ) -> Self {
        Self {
            date: date.into(),
            short_date: short_date.into(),
            fixture: fixture.into(),
            bet_label: bet_label.into(),
            odds,
            stake,
            gains,
            outcome: Outcome::from_gains(gains),
            image_ref: None,
            supplied_profit_loss: None,
            supplied_cumulative_profit: None,
        }
    }

    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    /// Net result of this bet, `gains - stake`, at currency precision.
    pub fn profit_loss(&self) -> f64 {
        round2(self.gains - self.stake)
    }
}
