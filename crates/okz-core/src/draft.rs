//! Budget-setting form state: the range being edited and its resolved draw.

use std::{fmt, str::FromStr};

use rand::Rng;

use crate::{resolve_budget, BudgetLimits, BudgetRange, CoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Bound::Min => "min",
            Bound::Max => "max",
        };
        f.write_str(label)
    }
}

impl FromStr for Bound {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "min" | "lower" => Ok(Bound::Min),
            "max" | "upper" => Ok(Bound::Max),
            other => Err(CoreError::Validation(format!(
                "unknown bound `{other}` (expected `min` or `max`)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Unresolved,
    Resolved(u32),
}

/// Tracks the range a user is editing and whether a budget has been drawn
/// for it. Any effective change to the range moves the draft back to
/// [`Resolution::Unresolved`].
#[derive(Debug, Clone)]
pub struct BudgetDraft {
    limits: BudgetLimits,
    range: BudgetRange,
    min_locked: bool,
    max_locked: bool,
    resolution: Resolution,
}

impl BudgetDraft {
    pub fn new(limits: BudgetLimits, range: BudgetRange) -> Result<Self, CoreError> {
        limits.validate(range)?;
        Ok(Self {
            limits,
            range,
            min_locked: false,
            max_locked: false,
            resolution: Resolution::Unresolved,
        })
    }

    pub fn limits(&self) -> BudgetLimits {
        self.limits
    }

    pub fn range(&self) -> BudgetRange {
        self.range
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// The drawn budget, if the range has not changed since the draw.
    pub fn resolved(&self) -> Option<u32> {
        match self.resolution {
            Resolution::Resolved(value) => Some(value),
            Resolution::Unresolved => None,
        }
    }

    pub fn is_locked(&self, bound: Bound) -> bool {
        match bound {
            Bound::Min => self.min_locked,
            Bound::Max => self.max_locked,
        }
    }

    pub fn lock(&mut self, bound: Bound) {
        self.set_lock(bound, true);
    }

    pub fn unlock(&mut self, bound: Bound) {
        self.set_lock(bound, false);
    }

    /// Replaces both bounds. Locked bounds must keep their current value.
    pub fn set_range(&mut self, min: u32, max: u32) -> Result<(), CoreError> {
        if self.min_locked && min != self.range.min() {
            return Err(CoreError::Validation(format!(
                "minimum is locked at {}",
                self.range.min()
            )));
        }
        if self.max_locked && max != self.range.max() {
            return Err(CoreError::Validation(format!(
                "maximum is locked at {}",
                self.range.max()
            )));
        }
        let range = self.limits.range(min, max)?;
        if range != self.range {
            self.range = range;
            self.discard_resolution();
        }
        Ok(())
    }

    pub fn set_bound(&mut self, bound: Bound, value: u32) -> Result<(), CoreError> {
        match bound {
            Bound::Min => self.set_range(value, self.range.max()),
            Bound::Max => self.set_range(self.range.min(), value),
        }
    }

    /// Draws a budget for the current range and records it.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u32 {
        let value = resolve_budget(self.range, rng);
        self.resolution = Resolution::Resolved(value);
        value
    }

    pub fn discard_resolution(&mut self) {
        self.resolution = Resolution::Unresolved;
    }

    fn set_lock(&mut self, bound: Bound, locked: bool) {
        match bound {
            Bound::Min => self.min_locked = locked,
            Bound::Max => self.max_locked = locked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn draft() -> BudgetDraft {
        BudgetDraft::new(
            BudgetLimits::default(),
            BudgetRange::new(1000, 5000).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn range_change_invalidates_resolved_budget() {
        let mut draft = draft();
        let mut rng = StdRng::seed_from_u64(1);
        let value = draft.roll(&mut rng);
        assert_eq!(draft.resolved(), Some(value));

        draft.set_bound(Bound::Max, 6000).unwrap();
        assert_eq!(draft.resolution(), Resolution::Unresolved);
        assert_eq!(draft.resolved(), None);
    }

    #[test]
    fn unchanged_range_keeps_resolution() {
        let mut draft = draft();
        let value = draft.roll(&mut StdRng::seed_from_u64(9));
        draft.set_range(1000, 5000).unwrap();
        assert_eq!(draft.resolved(), Some(value));
    }

    #[test]
    fn rejected_change_keeps_previous_state() {
        let mut draft = draft();
        let value = draft.roll(&mut StdRng::seed_from_u64(3));
        assert!(draft.set_range(6000, 2000).is_err());
        assert!(draft.set_range(100, 2000).is_err());
        assert_eq!(draft.range(), BudgetRange::new(1000, 5000).unwrap());
        assert_eq!(draft.resolved(), Some(value));
    }

    #[test]
    fn locked_bound_rejects_changes() {
        let mut draft = draft();
        draft.lock(Bound::Min);
        let err = draft.set_bound(Bound::Min, 2000).expect_err("min locked");
        assert!(matches!(err, CoreError::Validation(ref message) if message.contains("locked")));

        draft.set_bound(Bound::Max, 3000).expect("max still free");
        assert_eq!(draft.range().max(), 3000);

        draft.unlock(Bound::Min);
        draft.set_bound(Bound::Min, 2000).expect("unlocked");
        assert_eq!(draft.range().min(), 2000);
    }

    #[test]
    fn collapsed_range_rolls_fixed_value() {
        let mut draft = draft();
        draft.set_range(2500, 2500).unwrap();
        assert_eq!(draft.roll(&mut StdRng::seed_from_u64(11)), 2500);
    }

    #[test]
    fn parses_bound_names() {
        assert_eq!("MIN".parse::<Bound>().unwrap(), Bound::Min);
        assert_eq!("upper".parse::<Bound>().unwrap(), Bound::Max);
        assert!("middle".parse::<Bound>().is_err());
    }
}
