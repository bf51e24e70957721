//! Ledger derivation for the wager dashboard.
//!
//! Turns a raw betting log into a display-ready ledger. The derivation is a
//! single pure function built from four ordered stages:
//! - Chronological sort by calendar date (stable)
//! - Cumulative accumulation of profit/loss at currency precision
//! - Localization of labels into a requested display language
//! - Aggregate statistics (counts, win rate, totals, ROI)
//!
//! Records are validated before any stage runs, so a derivation either
//! returns a complete ledger or an error, never a partial result.

pub mod accumulate;
pub mod chronology;
pub mod distribution;
pub mod error;
pub mod ledger;
pub mod localize;
pub mod source;
pub mod statistics;
pub mod validation;

pub use accumulate::{accumulate, AccumulatedRecord};
pub use chronology::{sort_chronologically, DatedRecord};
pub use distribution::{BetTypeBreakdown, BetTypeCount, OutcomeSplit};
pub use error::{ErrorKind, LedgerError, Result};
pub use ledger::{derive_ledger, derive_ledger_for_tag, Ledger, LedgerDeriver, SeriesPoint};
pub use localize::{parse_language, DerivedRecord, LabelCatalog, Localizer};
pub use source::BetSheet;
pub use statistics::{LedgerStatistics, StakeLine};
pub use validation::{RecordValidator, ValidationReport, Violation, ViolationKind};
