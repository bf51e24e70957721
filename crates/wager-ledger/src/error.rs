use wager_types::{Outcome, TypeError};

/// Errors produced by ledger derivation and bet sheet loading.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("record {index}: unknown month name {month:?} in date {date:?}")]
    UnknownMonth {
        index: usize,
        date: String,
        month: String,
    },

    #[error("record {index}: malformed date {date:?}")]
    MalformedDate { index: usize, date: String },

    #[error("record {index}: invalid date {date:?}: {reason}")]
    InvalidDate {
        index: usize,
        date: String,
        reason: String,
    },

    #[error("record {index}: short date {short_date:?} does not match date {date:?}")]
    ShortDateMismatch {
        index: usize,
        short_date: String,
        date: String,
    },

    #[error("record {index}: {field} must be {expected}, got {value}")]
    InvalidAmount {
        index: usize,
        field: &'static str,
        expected: &'static str,
        value: f64,
    },

    #[error("record {index}: outcome {outcome} is inconsistent with gains {gains}")]
    OutcomeMismatch {
        index: usize,
        outcome: Outcome,
        gains: f64,
    },

    #[error("record {index}: supplied profit/loss {supplied} differs from gains - stake = {computed}")]
    ProfitMismatch {
        index: usize,
        supplied: f64,
        computed: f64,
    },

    #[error("unsupported language tag: {0:?}")]
    UnsupportedLanguage(String),

    #[error("bet sheet error: {0}")]
    Source(String),
}

/// Coarse classification of a [`LedgerError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The betting data itself is wrong.
    DataDefect,
    /// The caller asked for something unsupported.
    Configuration,
    /// The bet sheet could not be read or decoded.
    Source,
}

impl LedgerError {
    /// Attach a record index to a date parsing error.
    pub fn for_record(index: usize, date: &str, err: TypeError) -> Self {
        match err {
            TypeError::UnknownMonth(month) => Self::UnknownMonth {
                index,
                date: date.to_string(),
                month,
            },
            TypeError::MalformedDate(_) => Self::MalformedDate {
                index,
                date: date.to_string(),
            },
            TypeError::InvalidDate { reason, .. } => Self::InvalidDate {
                index,
                date: date.to_string(),
                reason,
            },
            TypeError::UnsupportedLanguage(tag) => Self::UnsupportedLanguage(tag),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedLanguage(_) => ErrorKind::Configuration,
            Self::Source(_) => ErrorKind::Source,
            _ => ErrorKind::DataDefect,
        }
    }

    /// Index of the offending record, for data defects.
    pub fn record_index(&self) -> Option<usize> {
        match self {
            Self::UnknownMonth { index, .. }
            | Self::MalformedDate { index, .. }
            | Self::InvalidDate { index, .. }
            | Self::ShortDateMismatch { index, .. }
            | Self::InvalidAmount { index, .. }
            | Self::OutcomeMismatch { index, .. }
            | Self::ProfitMismatch { index, .. } => Some(*index),
            Self::UnsupportedLanguage(_) | Self::Source(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
