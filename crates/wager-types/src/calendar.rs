//! Calendar dates as written in the betting log.
//!
//! Source dates look like `"16 avril 2025"`: a day number, a French month
//! name and a year. The month vocabulary is fixed, so any other month token
//! is a data-entry defect and is reported rather than guessed.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TypeError};
use crate::language::Language;

/// A calendar month. Ordering follows the calendar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

impl Month {
    /// Resolve a month from its source-locale (French) name.
    ///
    /// Matching is case-insensitive; accents are significant.
    pub fn from_name(name: &str) -> Result<Self> {
        let lowered = name.to_lowercase();
        MONTHS
            .iter()
            .copied()
            .find(|m| m.french_name() == lowered)
            .ok_or_else(|| TypeError::UnknownMonth(name.to_string()))
    }

    /// Month number, 1 through 12.
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn french_name(&self) -> &'static str {
        match self {
            Self::January => "janvier",
            Self::February => "février",
            Self::March => "mars",
            Self::April => "avril",
            Self::May => "mai",
            Self::June => "juin",
            Self::July => "juillet",
            Self::August => "août",
            Self::September => "septembre",
            Self::October => "octobre",
            Self::November => "novembre",
            Self::December => "décembre",
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// The month name in the given display language.
    pub fn name(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.english_name(),
            Language::Fr => self.french_name(),
        }
    }
}

/// A day / month / year triplet.
///
/// Ordering is chronological: year, then month, then day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: Month,
    pub day: u32,
}

impl CalendarDate {
    /// Create a date, checking that the day exists in that month and year.
    pub fn new(year: i32, month: Month, day: u32) -> Result<Self> {
        if NaiveDate::from_ymd_opt(year, month.number(), day).is_none() {
            return Err(TypeError::InvalidDate {
                date: format!("{day} {} {year}", month.french_name()),
                reason: format!("{} has no day {day}", month.english_name()),
            });
        }
        Ok(Self { year, month, day })
    }

    /// Parse a source-locale date such as `"16 avril 2025"`.
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(TypeError::MalformedDate(text.to_string()));
        };

        let day: u32 = day
            .parse()
            .map_err(|_| TypeError::MalformedDate(text.to_string()))?;
        let month = Month::from_name(month)?;
        let year: i32 = year
            .parse()
            .map_err(|_| TypeError::MalformedDate(text.to_string()))?;

        Self::new(year, month, day).map_err(|e| match e {
            TypeError::InvalidDate { reason, .. } => TypeError::InvalidDate {
                date: text.to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Render the date with the month name in the given language.
    pub fn display(&self, language: Language) -> String {
        format!("{} {} {}", self.day, self.month.name(language), self.year)
    }

    /// Compact `dd/mm` token used on chart axes.
    pub fn short_token(&self) -> String {
        format!("{:02}/{:02}", self.day, self.month.number())
    }

    /// Returns `true` if `short` names the same day and month (`d/m`,
    /// zero padding optional).
    pub fn matches_short_date(&self, short: &str) -> bool {
        let Some((day, month)) = short.trim().split_once('/') else {
            return false;
        };
        match (day.parse::<u32>(), month.parse::<u32>()) {
            (Ok(d), Ok(m)) => d == self.day && m == self.month.number(),
            _ => false,
        }
    }

    pub fn to_naive(&self) -> NaiveDate {
        // Invariant upheld by `new`: the triplet is a real date.
        NaiveDate::from_ymd_opt(self.year, self.month.number(), self.day)
            .unwrap_or(NaiveDate::MIN)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(Language::Fr))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn parses_source_dates() {
        let d = CalendarDate::parse("16 avril 2025").unwrap();
        assert_eq!(d, CalendarDate { year: 2025, month: Month::April, day: 16 });
        assert_eq!(d.short_token(), "16/04");
    }

    #[test]
    fn month_matching_is_case_insensitive() {
        assert_eq!(Month::from_name("Février").unwrap(), Month::February);
        assert_eq!(Month::from_name("AOÛT").unwrap(), Month::August);
    }

    #[test]
    fn unknown_month_is_rejected() {
        let err = CalendarDate::parse("3 April 2025").unwrap_err();
        assert_eq!(err, TypeError::UnknownMonth("April".into()));
    }

    #[test]
    fn malformed_dates_are_rejected() {
        assert!(matches!(
            CalendarDate::parse("16 avril"),
            Err(TypeError::MalformedDate(_))
        ));
        assert!(matches!(
            CalendarDate::parse("seize avril 2025"),
            Err(TypeError::MalformedDate(_))
        ));
    }

    #[test]
    fn impossible_day_is_rejected() {
        let err = CalendarDate::parse("30 février 2024").unwrap_err();
        assert!(matches!(err, TypeError::InvalidDate { ref date, .. } if date == "30 février 2024"));
        assert!(CalendarDate::parse("29 février 2024").is_ok());
    }

    #[test]
    fn displays_in_both_languages() {
        let d = CalendarDate::parse("3 mai 2025").unwrap();
        assert_eq!(d.display(Language::En), "3 May 2025");
        assert_eq!(d.display(Language::Fr), "3 mai 2025");
    }

    #[test]
    fn short_date_matching_accepts_padding() {
        let d = CalendarDate::parse("3 mai 2025").unwrap();
        assert!(d.matches_short_date("03/05"));
        assert!(d.matches_short_date("3/5"));
        assert!(!d.matches_short_date("05/03"));
        assert!(!d.matches_short_date("0305"));
    }

    #[test]
    fn ordering_is_chronological() {
        let a = CalendarDate::parse("31 décembre 2024").unwrap();
        let b = CalendarDate::parse("1 janvier 2025").unwrap();
        let c = CalendarDate::parse("2 janvier 2025").unwrap();
        assert!(a < b && b < c);
    }

    proptest! {
        #[test]
        fn ordering_matches_naive_date(
            y1 in 2000i32..2030, m1 in 0usize..12, d1 in 1u32..29,
            y2 in 2000i32..2030, m2 in 0usize..12, d2 in 1u32..29,
        ) {
            let a = CalendarDate::new(y1, MONTHS[m1], d1).unwrap();
            let b = CalendarDate::new(y2, MONTHS[m2], d2).unwrap();
            prop_assert_eq!(a.cmp(&b), a.to_naive().cmp(&b.to_naive()));
        }
    }
}
