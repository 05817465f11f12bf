//! Domain model for a budgeted day and its derived totals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::*, expense::Expense};

/// A single day's budget exercise.
///
/// Totals are always derived from `expenses` on demand and never stored, so
/// they cannot drift from the underlying entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: Uuid,
    pub min_budget: u32,
    pub max_budget: u32,
    pub actual_budget: u32,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub completed: bool,
}

impl Challenge {
    pub fn new(min_budget: u32, max_budget: u32, actual_budget: u32, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            min_budget,
            max_budget,
            actual_budget,
            date,
            expenses: Vec::new(),
            completed: false,
        }
    }

    /// Sum of every recorded expense amount.
    pub fn total_spent(&self) -> f64 {
        sum_amounts(&self.expenses)
    }

    /// Budget left for the day; negative once the allowance is exceeded.
    pub fn remaining(&self) -> f64 {
        f64::from(self.actual_budget) - self.total_spent()
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining() < 0.0
    }

    pub fn status(&self) -> BudgetStatus {
        BudgetStatus::from_remaining(self.remaining())
    }

    /// Share of the budget already spent, in percent. May exceed 100.
    pub fn percent_spent(&self) -> f64 {
        self.total_spent() / f64::from(self.actual_budget) * 100.0
    }

    /// `percent_spent` clamped to `0..=100` for progress gauges.
    pub fn progress_ratio(&self) -> f64 {
        let percent = self.percent_spent();
        if percent.is_nan() {
            return 0.0;
        }
        percent.clamp(0.0, 100.0)
    }

    pub fn expense_mut(&mut self, id: Uuid) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|expense| expense.id == id)
    }

    /// Appends an expense and returns its identifier.
    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        id
    }

    pub fn remove_expense(&mut self, id: Uuid) -> Option<Expense> {
        let index = self.expenses.iter().position(|expense| expense.id == id)?;
        Some(self.expenses.remove(index))
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
    }
}

impl Identifiable for Challenge {
    fn id(&self) -> Uuid {
        self.id
    }
}
