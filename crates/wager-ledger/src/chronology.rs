use tracing::debug;
use wager_types::{BetRecord, CalendarDate};

use crate::error::{LedgerError, Result};

/// A raw record paired with its parsed calendar date.
#[derive(Clone, Debug, PartialEq)]
pub struct DatedRecord {
    pub date: CalendarDate,
    /// Position of the record in the unsorted input.
    pub source_index: usize,
    pub record: BetRecord,
}

/// Order records ascending by calendar date.
///
/// Every date is parsed before anything is reordered; the first
/// unparseable date fails the whole call. Records sharing a date keep
/// their input order.
pub fn sort_chronologically(records: &[BetRecord]) -> Result<Vec<DatedRecord>> {
    let mut dated = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            CalendarDate::parse(&record.date)
                .map(|date| DatedRecord {
                    date,
                    source_index: index,
                    record: record.clone(),
                })
                .map_err(|e| LedgerError::for_record(index, &record.date, e))
        })
        .collect::<Result<Vec<_>>>()?;

    // `sort_by_key` is stable.
    dated.sort_by_key(|d| d.date);
    debug!(count = dated.len(), "records sorted chronologically");
    Ok(dated)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn record(date: &str, fixture: &str) -> BetRecord {
        BetRecord::new(date, "", fixture, "bet", 1.5, 100.0, 0.0)
    }

    #[test]
    fn sorts_across_years() {
        let records = vec![
            record("1 janvier 2025", "later"),
            record("1 janvier 2024", "earlier"),
        ];
        let sorted = sort_chronologically(&records).unwrap();
        let fixtures: Vec<_> = sorted.iter().map(|d| d.record.fixture.as_str()).collect();
        assert_eq!(fixtures, vec!["earlier", "later"]);
        assert_eq!(sorted[0].source_index, 1);
    }

    #[test]
    fn month_order_beats_name_order() {
        // "avril" sorts before "mai" alphabetically too; "mars" does not.
        let records = vec![
            record("1 mai 2025", "may"),
            record("1 mars 2025", "march"),
            record("1 avril 2025", "april"),
        ];
        let sorted = sort_chronologically(&records).unwrap();
        let fixtures: Vec<_> = sorted.iter().map(|d| d.record.fixture.as_str()).collect();
        assert_eq!(fixtures, vec!["march", "april", "may"]);
    }

    #[test]
    fn same_date_keeps_input_order() {
        let records = vec![
            record("6 mai 2025", "second day"),
            record("3 mai 2025", "first"),
            record("3 mai 2025", "second"),
            record("3 mai 2025", "third"),
        ];
        let sorted = sort_chronologically(&records).unwrap();
        let fixtures: Vec<_> = sorted.iter().map(|d| d.record.fixture.as_str()).collect();
        assert_eq!(fixtures, vec!["first", "second", "third", "second day"]);
    }

    #[test]
    fn unknown_month_fails() {
        let records = vec![record("1 janvier 2025", "a"), record("2 Janvary 2025", "b")];
        let err = sort_chronologically(&records).unwrap_err();
        assert_eq!(err.record_index(), Some(1));
        assert!(matches!(err, LedgerError::UnknownMonth { .. }));
    }

    #[test]
    fn input_is_untouched() {
        let records = vec![record("2 mai 2025", "b"), record("1 mai 2025", "a")];
        let before = records.clone();
        sort_chronologically(&records).unwrap();
        assert_eq!(records, before);
    }

    const NAMES: [&str; 12] = [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ];

    proptest! {
        #[test]
        fn output_is_non_decreasing_and_stable(
            dates in prop::collection::vec((2023i32..2026, 0usize..12, 1u32..29), 0..40)
        ) {
            let records: Vec<_> = dates
                .iter()
                .enumerate()
                .map(|(i, (y, m, d))| record(&format!("{d} {} {y}", NAMES[*m]), &i.to_string()))
                .collect();
            let sorted = sort_chronologically(&records).unwrap();
            prop_assert_eq!(sorted.len(), records.len());
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].date <= pair[1].date);
                if pair[0].date == pair[1].date {
                    prop_assert!(pair[0].source_index < pair[1].source_index);
                }
            }
        }
    }
}
