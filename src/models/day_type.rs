//! Day classification for generated timesheet entries.
//!
//! MinWinTid labels every day as a regular working day, a Saturday or a
//! Sunday; downstream salary calculation keys weekend supplements off this
//! label, so the mock must derive it from the calendar exactly.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The working-day classification of a timesheet date.
///
/// Derived solely from the date's day of week. Serializes to the Norwegian
/// labels the real endpoints emit (`"Virkedag"`, `"Lørdag"`, `"Søndag"`).
///
/// # Example
///
/// ```
/// use minwintid_mock::models::DayType;
/// use chrono::NaiveDate;
///
/// // 2024-01-06 is a Saturday
/// let date = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
/// assert_eq!(DayType::from_date(date), DayType::Saturday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayType {
    /// Monday through Friday.
    #[serde(rename = "Virkedag")]
    Workday,
    /// Saturday.
    #[serde(rename = "Lørdag")]
    Saturday,
    /// Sunday.
    #[serde(rename = "Søndag")]
    Sunday,
}

impl DayType {
    /// Classifies a date by its day of week.
    pub fn from_date(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat => DayType::Saturday,
            Weekday::Sun => DayType::Sunday,
            _ => DayType::Workday,
        }
    }

    /// The wire label for this day type.
    pub fn label(&self) -> &'static str {
        match self {
            DayType::Workday => "Virkedag",
            DayType::Saturday => "Lørdag",
            DayType::Sunday => "Søndag",
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
