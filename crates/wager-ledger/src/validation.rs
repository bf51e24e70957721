use serde::Serialize;
use wager_types::{BetRecord, CalendarDate, Outcome, TypeError};

use crate::error::{LedgerError, Result};

/// Supplied and computed profit/loss may differ by less than half a cent.
const PROFIT_TOLERANCE: f64 = 0.005;

/// Result of validating a betting log.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidationReport {
    pub record_count: usize,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Returns `true` if all checks passed.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A specific defect found in one record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Violation {
    pub index: usize,
    pub kind: ViolationKind,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ViolationKind {
    UnknownMonth,
    MalformedDate,
    InvalidDate,
    ShortDateMismatch,
    InvalidAmount,
    OutcomeMismatch,
    ProfitMismatch,
}

/// Record-level integrity validator.
pub struct RecordValidator;

impl RecordValidator {
    /// Check every record and collect all violations.
    pub fn validate(records: &[BetRecord]) -> ValidationReport {
        let violations = records
            .iter()
            .enumerate()
            .flat_map(|(index, record)| {
                record_errors(index, record)
                    .into_iter()
                    .map(move |(kind, err)| Violation {
                        index,
                        kind,
                        description: err.to_string(),
                    })
            })
            .collect();

        ValidationReport {
            record_count: records.len(),
            violations,
        }
    }

    /// Fail with the first defect found, in record order.
    pub fn check(records: &[BetRecord]) -> Result<()> {
        for (index, record) in records.iter().enumerate() {
            if let Some((_, err)) = record_errors(index, record).into_iter().next() {
                return Err(err);
            }
        }
        Ok(())
    }
}

fn record_errors(index: usize, record: &BetRecord) -> Vec<(ViolationKind, LedgerError)> {
    let mut errors = Vec::new();

    match CalendarDate::parse(&record.date) {
        Ok(date) => {
            if !date.matches_short_date(&record.short_date) {
                errors.push((
                    ViolationKind::ShortDateMismatch,
                    LedgerError::ShortDateMismatch {
                        index,
                        short_date: record.short_date.clone(),
                        date: record.date.clone(),
                    },
                ));
            }
        }
        Err(e) => {
            let kind = match e {
                TypeError::UnknownMonth(_) => ViolationKind::UnknownMonth,
                TypeError::InvalidDate { .. } => ViolationKind::InvalidDate,
                _ => ViolationKind::MalformedDate,
            };
            errors.push((kind, LedgerError::for_record(index, &record.date, e)));
        }
    }

    if !(record.odds.is_finite() && record.odds > 0.0) {
        errors.push((
            ViolationKind::InvalidAmount,
            LedgerError::InvalidAmount {
                index,
                field: "odds",
                expected: "a positive number",
                value: record.odds,
            },
        ));
    }
    for (field, value) in [("stake", record.stake), ("gains", record.gains)] {
        if !(value.is_finite() && value >= 0.0) {
            errors.push((
                ViolationKind::InvalidAmount,
                LedgerError::InvalidAmount {
                    index,
                    field,
                    expected: "a non-negative number",
                    value,
                },
            ));
        }
    }

    if record.outcome != Outcome::from_gains(record.gains) {
        errors.push((
            ViolationKind::OutcomeMismatch,
            LedgerError::OutcomeMismatch {
                index,
                outcome: record.outcome,
                gains: record.gains,
            },
        ));
    }

    if let Some(supplied) = record.supplied_profit_loss {
        let computed = record.profit_loss();
        if !((supplied - computed).abs() < PROFIT_TOLERANCE) {
            errors.push((
                ViolationKind::ProfitMismatch,
                LedgerError::ProfitMismatch {
                    index,
                    supplied,
                    computed,
                },
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, short: &str, stake: f64, gains: f64) -> BetRecord {
        BetRecord::new(date, short, "Home - Away", "Résultat Naples", 1.5, stake, gains)
    }

    #[test]
    fn valid_log_passes() {
        let records = vec![
            record("16 avril 2025", "16/04", 100.0, 0.0),
            record("3 mai 2025", "03/05", 100.0, 150.0),
        ];
        let report = RecordValidator::validate(&records);
        assert!(report.is_valid());
        assert_eq!(report.record_count, 2);
        assert!(RecordValidator::check(&records).is_ok());
    }

    #[test]
    fn empty_log_is_valid() {
        assert!(RecordValidator::validate(&[]).is_valid());
    }

    #[test]
    fn collects_every_violation() {
        let mut bad_outcome = record("3 mai 2025", "03/05", 100.0, 150.0);
        bad_outcome.outcome = Outcome::Loss;
        let mut bad_profit = record("6 mai 2025", "06/05", 100.0, 146.0);
        bad_profit.supplied_profit_loss = Some(40.0);
        let records = vec![
            record("16 April 2025", "16/04", 100.0, 0.0),
            bad_outcome,
            bad_profit,
            record("7 mai 2025", "08/05", 100.0, 0.0),
        ];

        let report = RecordValidator::validate(&records);
        let kinds: Vec<_> = report.violations.iter().map(|v| (v.index, v.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                (0, ViolationKind::UnknownMonth),
                (1, ViolationKind::OutcomeMismatch),
                (2, ViolationKind::ProfitMismatch),
                (3, ViolationKind::ShortDateMismatch),
            ]
        );
    }

    #[test]
    fn check_returns_first_defect() {
        let records = vec![
            record("3 mai 2025", "03/05", 100.0, 150.0),
            record("4 foo 2025", "04/05", 100.0, 150.0),
            record("5 bar 2025", "05/05", 100.0, 150.0),
        ];
        let err = RecordValidator::check(&records).unwrap_err();
        assert_eq!(
            err,
            LedgerError::UnknownMonth {
                index: 1,
                date: "4 foo 2025".into(),
                month: "foo".into(),
            }
        );
    }

    #[test]
    fn rejects_bad_amounts() {
        let mut r = record("3 mai 2025", "03/05", -5.0, 150.0);
        r.odds = 0.0;
        let report = RecordValidator::validate(&[r]);
        assert_eq!(report.violations.len(), 2);
        assert!(report
            .violations
            .iter()
            .all(|v| v.kind == ViolationKind::InvalidAmount));
    }

    #[test]
    fn matching_supplied_profit_is_accepted() {
        let mut r = record("3 mai 2025", "03/05", 100.0, 150.0);
        r.supplied_profit_loss = Some(50.0);
        assert!(RecordValidator::check(&[r]).is_ok());
    }

    #[test]
    fn zero_stake_zero_gains_is_consistent() {
        let r = record("3 mai 2025", "03/05", 0.0, 0.0);
        assert!(RecordValidator::check(&[r]).is_ok());
    }
}
