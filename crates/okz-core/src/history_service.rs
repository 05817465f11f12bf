//! Aggregates over the archive of completed challenges.

use okz_domain::Challenge;

/// Totals shown above the history list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySummary {
    pub challenges: usize,
    pub within_budget: usize,
    pub over_budget: usize,
    pub total_budgeted: f64,
    pub total_spent: f64,
}

impl HistorySummary {
    pub fn total_remaining(&self) -> f64 {
        self.total_budgeted - self.total_spent
    }

    /// Share of challenges finished inside their budget, in percent.
    pub fn success_rate(&self) -> Option<f64> {
        if self.challenges == 0 {
            return None;
        }
        Some(self.within_budget as f64 / self.challenges as f64 * 100.0)
    }
}

/// Stateless helpers over archive snapshots.
pub struct HistoryService;

impl HistoryService {
    pub fn summarize(archive: &[Challenge]) -> HistorySummary {
        archive
            .iter()
            .fold(HistorySummary::default(), |mut summary, challenge| {
                summary.challenges += 1;
                if challenge.is_over_budget() {
                    summary.over_budget += 1;
                } else {
                    summary.within_budget += 1;
                }
                summary.total_budgeted += f64::from(challenge.actual_budget);
                summary.total_spent += challenge.total_spent();
                summary
            })
    }
}
