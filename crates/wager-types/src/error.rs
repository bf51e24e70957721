use thiserror::Error;

/// Errors produced by type parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown month name: {0:?}")]
    UnknownMonth(String),

    #[error("malformed date {0:?}: expected \"<day> <month> <year>\"")]
    MalformedDate(String),

    #[error("invalid calendar date {date:?}: {reason}")]
    InvalidDate { date: String, reason: String },

    #[error("unsupported language tag: {0:?}")]
    UnsupportedLanguage(String),
}

pub type Result<T> = std::result::Result<T, TypeError>;
