//! Annual salary draws for position allocations.
//!
//! The two MinWinTid schema variants disagree on salary stability: the legacy
//! feed re-draws the salary on every day, while the ORDS feed draws once per
//! request and repeats the value across the whole range. [`SalaryPolicy`]
//! makes that choice explicit at the call site.

use rand::Rng;

/// Lower bound for a drawn annual salary, in NOK.
pub const ANNUAL_SALARY_MIN: u32 = 400_000;

/// Upper bound for a drawn annual salary, in NOK.
pub const ANNUAL_SALARY_MAX: u32 = 800_000;

/// Draws an annual salary uniformly from the mock range.
pub fn draw_annual_salary<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(ANNUAL_SALARY_MIN..=ANNUAL_SALARY_MAX)
}

/// How the generator assigns annual salaries across the day range.
///
/// # Example
///
/// ```
/// use minwintid_mock::generator::SalaryPolicy;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let policy = SalaryPolicy::per_request(&mut rng);
/// let first = policy.next_salary(&mut rng);
/// let second = policy.next_salary(&mut rng);
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryPolicy {
    /// An independent draw for every day (legacy feed behavior).
    PerDay,
    /// One value held constant across every day (ORDS feed behavior).
    Fixed(u32),
}

impl SalaryPolicy {
    /// Creates a [`SalaryPolicy::Fixed`] policy from a single request-scoped
    /// draw.
    pub fn per_request<R: Rng + ?Sized>(rng: &mut R) -> Self {
        SalaryPolicy::Fixed(draw_annual_salary(rng))
    }

    /// Yields the salary for the next generated day.
    pub fn next_salary<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        match self {
            SalaryPolicy::PerDay => draw_annual_salary(rng),
            SalaryPolicy::Fixed(salary) => *salary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_draw_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..1000 {
            let salary = draw_annual_salary(&mut rng);
            assert!((ANNUAL_SALARY_MIN..=ANNUAL_SALARY_MAX).contains(&salary));
        }
    }

    #[test]
    fn test_fixed_policy_repeats_the_same_value() {
        let mut rng = StdRng::seed_from_u64(11);
        let policy = SalaryPolicy::per_request(&mut rng);
        let salaries: Vec<u32> = (0..50).map(|_| policy.next_salary(&mut rng)).collect();
        assert!(salaries.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_per_day_policy_varies() {
        let mut rng = StdRng::seed_from_u64(12);
        let policy = SalaryPolicy::PerDay;
        let salaries: Vec<u32> = (0..50).map(|_| policy.next_salary(&mut rng)).collect();
        // 50 independent uniform draws over 400k values collide with
        // negligible probability, so at least two must differ.
        assert!(salaries.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
