//! Date-range timesheet generation.
//!
//! The central operation of the mock: expand an inclusive date range into one
//! [`DaySheet`] per calendar day, with randomized punches and a salary
//! allocation per [`SalaryPolicy`].

use chrono::{Duration, NaiveDateTime};
use rand::Rng;

use crate::generator::{random_punch_pair, SalaryPolicy};
use crate::models::{DateRange, DaySheet, DayType, PositionAllocation};

/// Cost center code emitted on every position allocation (`koststed`).
pub const COST_CENTER: &str = "855210";

/// Purpose code emitted on every position allocation (`formal`).
pub const PURPOSE_CODE: &str = "000000";

/// Activity code emitted on every position allocation (`aktivitet`).
pub const ACTIVITY_CODE: &str = "000000";

/// Days after the range end at which the sheet counts as approved.
pub const APPROVAL_LAG_DAYS: i64 = 10;

/// Generates one timesheet day per calendar day in `range`, in ascending
/// order.
///
/// A reversed range produces an empty vector. Each day carries two punches
/// (In then Out) with randomized times and a single position allocation whose
/// salary follows `salary`. The approval date is fixed at
/// [`APPROVAL_LAG_DAYS`] past the range end.
///
/// Generation is purely functional apart from draws from `rng`; callers pass
/// a request-scoped generator so concurrent requests never contend.
///
/// # Example
///
/// ```
/// use minwintid_mock::generator::{generate_timesheet, SalaryPolicy};
/// use minwintid_mock::models::{DateRange, DayType};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let range = DateRange::parse("2024-01-01", "2024-01-07").unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// let days = generate_timesheet(&range, SalaryPolicy::PerDay, &mut rng);
///
/// assert_eq!(days.len(), 7);
/// assert_eq!(days[0].day_type, DayType::Workday); // Monday
/// assert_eq!(days[5].day_type, DayType::Saturday);
/// assert_eq!(days[6].day_type, DayType::Sunday);
/// ```
pub fn generate_timesheet<R: Rng + ?Sized>(
    range: &DateRange,
    salary: SalaryPolicy,
    rng: &mut R,
) -> Vec<DaySheet> {
    let approved_date = approval_date(range);

    range
        .iter_days()
        .map(|date| {
            let (punch_in, punch_out) = random_punch_pair(date, rng);
            DaySheet {
                date,
                day_type: DayType::from_date(date),
                approved_date,
                punches: vec![punch_in, punch_out],
                position: PositionAllocation {
                    cost_center: COST_CENTER.to_string(),
                    purpose: PURPOSE_CODE.to_string(),
                    activity: ACTIVITY_CODE.to_string(),
                    annual_salary: salary.next_salary(rng),
                },
            }
        })
        .collect()
}

fn approval_date(range: &DateRange) -> NaiveDateTime {
    (range.to + Duration::days(APPROVAL_LAG_DAYS))
        .and_hms_opt(0, 0, 0)
        .unwrap()
}
