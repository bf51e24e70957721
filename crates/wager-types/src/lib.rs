//! Foundation types for the wager ledger.
//!
//! This crate provides the raw input and vocabulary types used throughout
//! the workspace. The derivation pipeline in `wager-ledger` depends on it.
//!
//! # Key Types
//!
//! - [`BetRecord`]: One raw, immutable entry of the betting log
//! - [`Outcome`]: Win or loss classification
//! - [`CalendarDate`]: Day / month / year parsed from the source locale
//! - [`Month`]: The fixed, finite month vocabulary
//! - [`Language`]: Closed set of display languages

pub mod calendar;
pub mod error;
pub mod language;
pub mod money;
pub mod record;

pub use calendar::{CalendarDate, Month};
pub use error::{Result, TypeError};
pub use language::Language;
pub use record::{BetRecord, Outcome};
