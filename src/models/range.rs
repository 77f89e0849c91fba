//! Inclusive date ranges for timesheet requests.
//!
//! This module contains the [`DateRange`] type parsed from the `fra_dato` and
//! `til_dato` query parameters.

use chrono::NaiveDate;

use crate::error::{MockError, MockResult};

/// The date format accepted for `fra_dato`/`til_dato`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An inclusive calendar date range.
///
/// Both endpoints belong to the range. A reversed range (`to` before `from`)
/// is not an error: it simply yields an empty day sequence, matching the
/// behavior of the real endpoint.
///
/// # Example
///
/// ```
/// use minwintid_mock::models::DateRange;
///
/// let range = DateRange::parse("2024-01-01", "2024-01-07").unwrap();
/// assert_eq!(range.num_days(), 7);
///
/// let days: Vec<_> = range.iter_days().collect();
/// assert_eq!(days.first().unwrap().to_string(), "2024-01-01");
/// assert_eq!(days.last().unwrap().to_string(), "2024-01-07");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// The first date of the range (inclusive).
    pub from: NaiveDate,
    /// The last date of the range (inclusive).
    pub to: NaiveDate,
}

impl DateRange {
    /// Creates a range from two already-parsed dates.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Parses a range from `YYYY-MM-DD` query parameter values.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::MalformedDate`] naming the offending parameter
    /// if either string does not match the format.
    pub fn parse(fra_dato: &str, til_dato: &str) -> MockResult<Self> {
        let from = parse_date("fra_dato", fra_dato)?;
        let to = parse_date("til_dato", til_dato)?;
        Ok(Self { from, to })
    }

    /// Iterates every date in the range in ascending order, one calendar day
    /// apart, inclusive of both endpoints. Empty when `to < from`.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let to = self.to;
        self.from.iter_days().take_while(move |d| *d <= to)
    }

    /// The number of days in the range; zero when reversed.
    pub fn num_days(&self) -> u64 {
        if self.to < self.from {
            0
        } else {
            (self.to - self.from).num_days() as u64 + 1
        }
    }

    /// Checks if a given date falls within this range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

fn parse_date(parameter: &str, value: &str) -> MockResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| MockError::MalformedDate {
        parameter: parameter.to_string(),
        value: value.to_string(),
    })
}
