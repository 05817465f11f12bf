//! Owner of the active challenge and the archive.
//!
//! Every successful mutation persists the affected slot(s) before returning,
//! so callers never need an explicit save step. Rejected operations leave
//! both the in-memory state and the store untouched.

use std::sync::Arc;

use okz_domain::{Challenge, Expense};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{ChallengeRepository, Clock, CoreError, HistoryService, HistorySummary};

pub struct ChallengeManager {
    active: Option<Challenge>,
    archive: Vec<Challenge>,
    repository: ChallengeRepository,
    clock: Arc<dyn Clock>,
}

impl ChallengeManager {
    /// Restores state from `repository`.
    ///
    /// Archived entries are forced to `completed`, and an active challenge
    /// that already appears in the archive (an interrupted completion) is
    /// dropped.
    pub fn load(repository: ChallengeRepository, clock: Arc<dyn Clock>) -> Self {
        let mut archive = repository.load_archive();
        let mut repaired = 0;
        for challenge in archive.iter_mut().filter(|challenge| !challenge.completed) {
            warn!(challenge = %challenge.id, "archived challenge was not completed, fixing");
            challenge.mark_completed();
            repaired += 1;
        }
        if repaired > 0 {
            repository.save_archive(&archive);
        }

        let mut active = repository.load_active();
        if let Some(current) = active.as_ref() {
            if archive.iter().any(|challenge| challenge.id == current.id) {
                warn!(challenge = %current.id, "active challenge already archived, discarding");
                active = None;
                repository.save_active(None);
            } else if current.completed {
                warn!(challenge = %current.id, "active slot held a completed challenge");
                active = None;
                repository.save_active(None);
            }
        }

        info!(
            archived = archive.len(),
            active = active.is_some(),
            "challenge state loaded"
        );
        Self {
            active,
            archive,
            repository,
            clock,
        }
    }

    pub fn active(&self) -> Option<&Challenge> {
        self.active.as_ref()
    }

    /// Completed challenges, most recent first.
    pub fn archive(&self) -> &[Challenge] {
        &self.archive
    }

    pub fn challenge(&self, id: Uuid) -> Option<&Challenge> {
        self.archive.iter().find(|challenge| challenge.id == id)
    }

    pub fn history_summary(&self) -> HistorySummary {
        HistoryService::summarize(&self.archive)
    }

    /// Starts a new challenge from an already resolved budget.
    ///
    /// `actual_budget` is trusted as drawn from `min..=max`; it is only
    /// required to be positive.
    pub fn create_challenge(
        &mut self,
        min: u32,
        max: u32,
        actual_budget: u32,
    ) -> Result<Challenge, CoreError> {
        if let Some(current) = self.active.as_ref() {
            return Err(CoreError::Conflict(format!(
                "challenge {} is still in progress",
                current.id
            )));
        }
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
        if actual_budget == 0 {
            return Err(CoreError::Validation(
                "resolved budget must be greater than zero".into(),
            ));
        }

        let challenge = Challenge::new(min, max, actual_budget, self.clock.now());
        info!(challenge = %challenge.id, actual_budget, "challenge started");
        self.active = Some(challenge.clone());
        self.persist_active();
        Ok(challenge)
    }

    pub fn add_expense(&mut self, amount: f64, description: &str) -> Result<Expense, CoreError> {
        let now = self.clock.now();
        let challenge = self.active_mut()?;
        let description = validate_expense(amount, description)?;
        let expense = Expense::new(amount, description, now);
        challenge.add_expense(expense.clone());
        self.persist_active();
        Ok(expense)
    }

    /// Edits amount and description in place; position and timestamp are kept.
    pub fn update_expense(
        &mut self,
        id: Uuid,
        amount: f64,
        description: &str,
    ) -> Result<Expense, CoreError> {
        let challenge = self.active_mut()?;
        let description = validate_expense(amount, description)?;
        let expense = challenge
            .expense_mut(id)
            .ok_or(CoreError::ExpenseNotFound(id))?;
        expense.revise(amount, description);
        let updated = expense.clone();
        self.persist_active();
        Ok(updated)
    }

    pub fn delete_expense(&mut self, id: Uuid) -> Result<Expense, CoreError> {
        let removed = self
            .active_mut()?
            .remove_expense(id)
            .ok_or(CoreError::ExpenseNotFound(id))?;
        self.persist_active();
        Ok(removed)
    }

    /// Archives the active challenge at the front of the history.
    pub fn complete_challenge(&mut self) -> Result<Challenge, CoreError> {
        let mut challenge = self.active.take().ok_or(CoreError::NoActiveChallenge)?;
        challenge.mark_completed();
        info!(
            challenge = %challenge.id,
            spent = challenge.total_spent(),
            over_budget = challenge.is_over_budget(),
            "challenge completed"
        );
        self.archive.insert(0, challenge.clone());
        self.persist_archive();
        self.persist_active();
        Ok(challenge)
    }

    /// Removes one archived challenge. The active slot is never touched.
    pub fn delete_challenge(&mut self, id: Uuid) -> Result<Challenge, CoreError> {
        let index = self
            .archive
            .iter()
            .position(|challenge| challenge.id == id)
            .ok_or(CoreError::ChallengeNotFound(id))?;
        let removed = self.archive.remove(index);
        info!(challenge = %id, "archived challenge deleted");
        self.persist_archive();
        Ok(removed)
    }

    /// Empties the archive and returns how many entries were removed.
    pub fn delete_all_challenges(&mut self) -> usize {
        let removed = self.archive.len();
        self.archive.clear();
        info!(removed, "archive cleared");
        self.persist_archive();
        removed
    }

    fn active_mut(&mut self) -> Result<&mut Challenge, CoreError> {
        self.active.as_mut().ok_or(CoreError::NoActiveChallenge)
    }

    fn persist_active(&self) {
        self.repository.save_active(self.active.as_ref());
    }

    fn persist_archive(&self) {
        self.repository.save_archive(&self.archive);
    }
}

/// Checks expense input and returns the trimmed description.
fn validate_expense(amount: f64, description: &str) -> Result<String, CoreError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CoreError::Validation(format!(
            "expense amount must be a positive number, got {amount}"
        )));
    }
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "expense description must not be blank".into(),
        ));
    }
    Ok(trimmed.to_string())
}
