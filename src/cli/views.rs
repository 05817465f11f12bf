//! Text renderings of the budget draft, the running challenge and history.

use okz_core::{BudgetDraft, Bound, HistorySummary};
use okz_domain::Challenge;

use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::currency::{format_currency, format_date, format_time};

const BAR_WIDTH: usize = 24;

/// `[##########..............]` for a 0..=100 percentage.
pub fn progress_bar(percent: f64) -> String {
    let ratio = if percent.is_finite() {
        percent.clamp(0.0, 100.0) / 100.0
    } else {
        0.0
    };
    let filled = (ratio * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

fn lock_marker(draft: &BudgetDraft, bound: Bound) -> &'static str {
    if draft.is_locked(bound) {
        " (locked)"
    } else {
        ""
    }
}

pub fn render_draft(draft: &BudgetDraft, currency: &str) {
    let range = draft.range();
    let limits = draft.limits();
    output_section("Budget setup");
    io::print_info(format!(
        "  Minimum : {}{}",
        format_currency(range.min().into(), currency),
        lock_marker(draft, Bound::Min)
    ));
    io::print_info(format!(
        "  Maximum : {}{}",
        format_currency(range.max().into(), currency),
        lock_marker(draft, Bound::Max)
    ));
    io::print_info(format!(
        "  Allowed : {} .. {}",
        format_currency(limits.floor().into(), currency),
        format_currency(limits.ceiling().into(), currency)
    ));
    match draft.resolved() {
        Some(budget) => io::print_info(format!(
            "  Budget  : {}",
            format_currency(budget.into(), currency)
        )),
        None => io::print_info("  Budget  : not rolled yet (use `roll`)"),
    }
}

pub fn render_status(challenge: &Challenge, currency: &str) {
    output_section(format!("Today ({})", format_date(challenge.date)));
    io::print_info(format!(
        "  Budget    : {}  (range {} .. {})",
        format_currency(challenge.actual_budget.into(), currency),
        format_currency(challenge.min_budget.into(), currency),
        format_currency(challenge.max_budget.into(), currency)
    ));
    io::print_info(format!(
        "  Spent     : {}",
        format_currency(challenge.total_spent(), currency)
    ));
    let remaining = challenge.remaining();
    let line = format!("  Remaining : {}", format_currency(remaining, currency));
    if challenge.is_over_budget() {
        io::print_warning(format!("{}  over budget", line.trim_start()));
    } else {
        io::print_info(line);
    }
    io::print_info(format!(
        "  {} {:.0}%",
        progress_bar(challenge.progress_ratio()),
        challenge.percent_spent()
    ));
    render_expenses(challenge, currency);
}

fn render_expenses(challenge: &Challenge, currency: &str) {
    if challenge.expenses.is_empty() {
        io::print_info("  No expenses yet.");
        return;
    }
    for (index, expense) in challenge.expenses.iter().enumerate() {
        io::print_info(format!(
            "  {:>2}. {}  {:>10}  {}  ({})",
            index + 1,
            format_time(expense.timestamp),
            format_currency(expense.amount, currency),
            expense.description,
            short_id(&expense.id.to_string())
        ));
    }
}

pub fn render_history(archive: &[Challenge], summary: &HistorySummary, currency: &str) {
    output_section("History");
    if archive.is_empty() {
        io::print_info("  No completed challenges.");
        return;
    }
    let rate = summary
        .success_rate()
        .map(|rate| format!("{rate:.0}%"))
        .unwrap_or_else(|| "-".into());
    io::print_info(format!(
        "  {} completed, {} within budget, {} over ({} success)",
        summary.challenges, summary.within_budget, summary.over_budget, rate
    ));
    io::print_info(format!(
        "  Budgeted {}  Spent {}  Left {}",
        format_currency(summary.total_budgeted, currency),
        format_currency(summary.total_spent, currency),
        format_currency(summary.total_remaining(), currency)
    ));
    for (index, challenge) in archive.iter().enumerate() {
        io::print_info(format!(
            "  {:>2}. {}  {:>10} / {:<10}  {}  ({})",
            index + 1,
            format_date(challenge.date),
            format_currency(challenge.total_spent(), currency),
            format_currency(challenge.actual_budget.into(), currency),
            challenge.status(),
            short_id(&challenge.id.to_string())
        ));
    }
}

pub fn render_challenge(challenge: &Challenge, currency: &str) {
    output_section(format!("Challenge {}", format_date(challenge.date)));
    io::print_info(format!("  Id        : {}", challenge.id));
    io::print_info(format!(
        "  Budget    : {}  (range {} .. {})",
        format_currency(challenge.actual_budget.into(), currency),
        format_currency(challenge.min_budget.into(), currency),
        format_currency(challenge.max_budget.into(), currency)
    ));
    io::print_info(format!(
        "  Spent     : {}",
        format_currency(challenge.total_spent(), currency)
    ));
    io::print_info(format!(
        "  Result    : {} ({} left)",
        challenge.status(),
        format_currency(challenge.remaining(), currency)
    ));
    render_expenses(challenge, currency);
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(progress_bar(0.0), format!("[{}]", ".".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(150.0), format!("[{}]", "#".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(f64::NAN), progress_bar(0.0));
        assert_eq!(progress_bar(50.0).matches('#').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn short_id_truncates() {
        assert_eq!(short_id("0123456789abcdef"), "01234567");
        assert_eq!(short_id("abc"), "abc");
    }
}
