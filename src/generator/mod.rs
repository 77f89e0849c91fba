//! Timesheet generation for the MinWinTid mock.
//!
//! This module contains the generation logic: enumerating the requested date
//! range, drawing randomized punch times and salaries, and assembling the
//! per-day [`DaySheet`](crate::models::DaySheet) records the wire mappers
//! serialize.

mod punches;
mod salary;
mod timesheet;

pub use punches::{random_punch_pair, CLOCK_IN_HOURS, CLOCK_OUT_HOURS};
pub use salary::{draw_annual_salary, SalaryPolicy, ANNUAL_SALARY_MAX, ANNUAL_SALARY_MIN};
pub use timesheet::{
    generate_timesheet, ACTIVITY_CODE, APPROVAL_LAG_DAYS, COST_CENTER, PURPOSE_CODE,
};
