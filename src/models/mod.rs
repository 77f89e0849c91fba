//! Core data models for the MinWinTid mock service.
//!
//! This module contains the domain models the generator produces and the
//! wire mappers consume.

mod day_type;
mod range;
mod timesheet;

pub use day_type::DayType;
pub use range::DateRange;
pub use timesheet::{
    DaySheet, PositionAllocation, Punch, PunchDirection, APPROVAL_STATUS_APPROVED,
    NO_ABSENCE_CODE, NO_ABSENCE_LABEL,
};
