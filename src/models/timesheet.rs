//! Domain models for generated timesheet days.
//!
//! One [`DaySheet`] is produced per calendar day in the requested range.
//! These types are wire-format agnostic; the `api` module maps them onto the
//! legacy and ORDS schemas.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::DayType;

/// Approval status code for a fully approved sheet.
///
/// The consuming service only requires `godkjent >= 2`; the mock always
/// emits the final approval stage.
pub const APPROVAL_STATUS_APPROVED: u8 = 5;

/// Absence code for a punch with no absence registered.
pub const NO_ABSENCE_CODE: u32 = 0;

/// Absence label for a punch with no absence registered.
pub const NO_ABSENCE_LABEL: &str = "Ute";

/// The direction of a clock punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchDirection {
    /// Clock-in at the start of the working day.
    In,
    /// Clock-out at the end of the working day.
    Out,
}

impl PunchDirection {
    /// The wire label for this direction (`"Inn"`/`"Ut"`).
    pub fn label(&self) -> &'static str {
        match self {
            PunchDirection::In => "Inn",
            PunchDirection::Out => "Ut",
        }
    }

    /// The MinWinTid punch type code (`"B1"` for in, `"B2"` for out).
    pub fn type_code(&self) -> &'static str {
        match self {
            PunchDirection::In => "B1",
            PunchDirection::Out => "B2",
        }
    }
}

/// A single clock-in or clock-out event.
#[derive(Debug, Clone, PartialEq)]
pub struct Punch {
    /// When the punch was registered.
    pub time: NaiveDateTime,
    /// Whether this is a clock-in or a clock-out.
    pub direction: PunchDirection,
}

/// A cost-center/activity allocation with the annual salary rate.
///
/// The real system splits an employee's time across positions; the mock
/// always emits exactly one allocation per day.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionAllocation {
    /// Cost center code (`koststed`).
    pub cost_center: String,
    /// Purpose code (`formal`).
    pub purpose: String,
    /// Activity code (`aktivitet`).
    pub activity: String,
    /// Annual salary in NOK (`RATE_K001`).
    pub annual_salary: u32,
}

/// One generated timesheet day.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySheet {
    /// The calendar date of this entry.
    pub date: NaiveDate,
    /// Working-day classification derived from the date.
    pub day_type: DayType,
    /// When the sheet was approved (10 days past the range end).
    pub approved_date: NaiveDateTime,
    /// The day's punches: one In followed by one Out.
    pub punches: Vec<Punch>,
    /// The day's single position allocation.
    pub position: PositionAllocation,
}

impl DaySheet {
    /// The clock-in punch.
    pub fn punch_in(&self) -> &Punch {
        &self.punches[0]
    }

    /// The clock-out punch.
    pub fn punch_out(&self) -> &Punch {
        &self.punches[1]
    }
}
