//! Randomized clock punch generation.
//!
//! Each generated day gets exactly one In and one Out punch. The in-punch
//! lands between 07:00 and 09:59, the out-punch between 14:00 and 17:59, so
//! the pair is always chronologically ordered without an explicit check.

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use rand::Rng;

use crate::models::{Punch, PunchDirection};

/// Hour range for clock-in punches (inclusive).
pub const CLOCK_IN_HOURS: RangeInclusive<u32> = 7..=9;

/// Hour range for clock-out punches (inclusive).
pub const CLOCK_OUT_HOURS: RangeInclusive<u32> = 14..=17;

/// Draws a random In/Out punch pair for the given date.
///
/// Minutes are uniform over 0–59, seconds are always zero.
///
/// # Example
///
/// ```
/// use minwintid_mock::generator::random_punch_pair;
/// use chrono::{NaiveDate, Timelike};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// let (punch_in, punch_out) = random_punch_pair(date, &mut rng);
///
/// assert!((7..=9).contains(&punch_in.time.hour()));
/// assert!((14..=17).contains(&punch_out.time.hour()));
/// assert!(punch_in.time < punch_out.time);
/// ```
pub fn random_punch_pair<R: Rng + ?Sized>(date: NaiveDate, rng: &mut R) -> (Punch, Punch) {
    let punch_in = random_punch(date, PunchDirection::In, CLOCK_IN_HOURS, rng);
    let punch_out = random_punch(date, PunchDirection::Out, CLOCK_OUT_HOURS, rng);
    (punch_in, punch_out)
}

fn random_punch<R: Rng + ?Sized>(
    date: NaiveDate,
    direction: PunchDirection,
    hours: RangeInclusive<u32>,
    rng: &mut R,
) -> Punch {
    let hour = rng.gen_range(hours);
    let minute = rng.gen_range(0..60);
    // Bounds are checked by the ranges above, so this cannot fail.
    let time = date.and_hms_opt(hour, minute, 0).unwrap();
    Punch { time, direction }
}
