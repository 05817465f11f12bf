//! Budget range validation and the daily budget draw.

use rand::Rng;

use crate::CoreError;

pub const DEFAULT_BUDGET_FLOOR: u32 = 500;
pub const DEFAULT_BUDGET_CEILING: u32 = 10_000;
pub const DEFAULT_RANGE_MIN: u32 = 1_000;
pub const DEFAULT_RANGE_MAX: u32 = 5_000;

/// Inclusive budget range the day's allowance is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetRange {
    min: u32,
    max: u32,
}

impl BudgetRange {
    /// Builds a range, rejecting zero budgets and inverted bounds.
    pub fn new(min: u32, max: u32) -> Result<Self, CoreError> {
        if min == 0 {
            return Err(CoreError::Validation(
                "minimum budget must be greater than zero".into(),
            ));
        }
        if min > max {
            return Err(CoreError::Validation(format!(
                "minimum budget {min} exceeds maximum budget {max}"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// True when the range collapses to a single value.
    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Allowed envelope for user-chosen ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetLimits {
    floor: u32,
    ceiling: u32,
}

impl Default for BudgetLimits {
    fn default() -> Self {
        Self {
            floor: DEFAULT_BUDGET_FLOOR,
            ceiling: DEFAULT_BUDGET_CEILING,
        }
    }
}

impl BudgetLimits {
    pub fn new(floor: u32, ceiling: u32) -> Result<Self, CoreError> {
        if floor == 0 {
            return Err(CoreError::Validation(
                "budget floor must be greater than zero".into(),
            ));
        }
        if floor > ceiling {
            return Err(CoreError::Validation(format!(
                "budget floor {floor} exceeds ceiling {ceiling}"
            )));
        }
        Ok(Self { floor, ceiling })
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    /// Builds a range and checks it sits inside `floor..=ceiling`.
    pub fn range(&self, min: u32, max: u32) -> Result<BudgetRange, CoreError> {
        let range = BudgetRange::new(min, max)?;
        self.validate(range)?;
        Ok(range)
    }

    pub fn validate(&self, range: BudgetRange) -> Result<(), CoreError> {
        if range.min() < self.floor || range.max() > self.ceiling {
            return Err(CoreError::Validation(format!(
                "budget range {}..{} must stay within {}..{}",
                range.min(),
                range.max(),
                self.floor,
                self.ceiling
            )));
        }
        Ok(())
    }
}

/// Draws the day's budget from `range`.
///
/// A collapsed range returns its single value without consulting `rng`.
pub fn resolve_budget<R: Rng + ?Sized>(range: BudgetRange, rng: &mut R) -> u32 {
    if range.is_fixed() {
        return range.min();
    }
    rng.gen_range(range.min()..=range.max())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, RngCore, SeedableRng};

    /// Random source that fails the test if it is ever consulted.
    struct UntouchableRng;

    impl RngCore for UntouchableRng {
        fn next_u32(&mut self) -> u32 {
            panic!("random source consulted");
        }

        fn next_u64(&mut self) -> u64 {
            panic!("random source consulted");
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("random source consulted");
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            panic!("random source consulted");
        }
    }

    #[test]
    fn range_rejects_inverted_and_zero_bounds() {
        assert!(matches!(
            BudgetRange::new(5000, 1000),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(BudgetRange::new(0, 10), Err(CoreError::Validation(_))));
        assert!(BudgetRange::new(1000, 1000).is_ok());
    }

    #[test]
    fn limits_reject_ranges_outside_envelope() {
        let limits = BudgetLimits::default();
        assert!(limits.range(400, 1000).is_err());
        assert!(limits.range(1000, 12_000).is_err());
        assert!(limits.range(500, 10_000).is_ok());
        assert!(BudgetLimits::new(0, 100).is_err());
        assert!(BudgetLimits::new(200, 100).is_err());
    }

    #[test]
    fn fixed_range_never_consults_random_source() {
        let range = BudgetRange::new(1000, 1000).unwrap();
        for _ in 0..10 {
            assert_eq!(resolve_budget(range, &mut UntouchableRng), 1000);
        }
    }

    #[test]
    fn draws_stay_inside_range() {
        let range = BudgetRange::new(1000, 5000).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let value = resolve_budget(range, &mut rng);
            assert!(range.contains(value), "{value} outside range");
        }
    }

    #[test]
    fn draws_are_roughly_uniform_and_hit_both_ends() {
        let range = BudgetRange::new(1, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        let draws = 40_000;
        let mut counts = [0usize; 4];
        for _ in 0..draws {
            counts[(resolve_budget(range, &mut rng) - 1) as usize] += 1;
        }
        let expected = draws / counts.len();
        for (index, count) in counts.iter().enumerate() {
            let deviation = (*count as f64 - expected as f64).abs() / expected as f64;
            assert!(
                deviation < 0.05,
                "value {} drawn {count} times, expected about {expected}",
                index + 1
            );
        }
    }
}
