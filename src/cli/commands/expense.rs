use okz_core::CoreError;
use okz_domain::Challenge;
use uuid::Uuid;

use super::parse_amount;
use crate::cli::core::{CommandError, CommandResult, ShellContext, View};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::selectors::resolve_reference;
use crate::cli::views;
use crate::currency::format_currency;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record an expense against today's budget",
            "add <amount> <description...>",
            cmd_add,
        ),
        CommandEntry::new(
            "edit",
            "Change an expense's amount and description",
            "edit <n|id> <amount> <description...>",
            cmd_edit,
        ),
        CommandEntry::new("remove", "Delete an expense", "remove <n|id>", cmd_remove),
        CommandEntry::new("status", "Show today's challenge", "status", cmd_status),
        CommandEntry::new(
            "complete",
            "Finish today's challenge and archive it",
            "complete",
            cmd_complete,
        ),
    ]
}

fn active(context: &ShellContext) -> Result<&Challenge, CommandError> {
    context
        .session
        .manager
        .active()
        .ok_or(CommandError::Core(CoreError::NoActiveChallenge))
}

fn expense_id(context: &ShellContext, reference: &str) -> Result<Uuid, CommandError> {
    resolve_reference(&active(context)?.expenses, reference, "expense")
}

fn show_status(context: &mut ShellContext) {
    context.switch_view(View::Track);
    if let Some(challenge) = context.session.manager.active() {
        views::render_status(challenge, context.currency());
    }
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [amount, description @ ..] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: add <amount> <description...>".into(),
        ));
    };
    let amount = parse_amount(amount)?;
    let expense = context
        .session
        .manager
        .add_expense(amount, &description.join(" "))?;
    io::print_success(format!(
        "Added {} for {}.",
        format_currency(expense.amount, context.currency()),
        expense.description
    ));
    show_status(context);
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [reference, amount, description @ ..] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: edit <n|id> <amount> <description...>".into(),
        ));
    };
    let id = expense_id(context, reference)?;
    let amount = parse_amount(amount)?;
    let expense = context
        .session
        .manager
        .update_expense(id, amount, &description.join(" "))?;
    io::print_success(format!(
        "Updated expense: {} for {}.",
        format_currency(expense.amount, context.currency()),
        expense.description
    ));
    show_status(context);
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [reference] = args else {
        return Err(CommandError::InvalidArguments("usage: remove <n|id>".into()));
    };
    let id = expense_id(context, reference)?;
    let removed = context.session.manager.delete_expense(id)?;
    io::print_success(format!(
        "Removed {} for {}.",
        format_currency(removed.amount, context.currency()),
        removed.description
    ));
    show_status(context);
    Ok(())
}

fn cmd_status(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    active(context)?;
    show_status(context);
    Ok(())
}

fn cmd_complete(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let challenge = context.session.manager.complete_challenge()?;
    let currency = context.currency();
    let remaining = challenge.remaining();
    if challenge.is_over_budget() {
        io::print_warning(format!(
            "Challenge complete: over budget by {}.",
            format_currency(-remaining, currency)
        ));
    } else {
        io::print_success(format!(
            "Challenge complete: within budget with {} to spare.",
            format_currency(remaining, currency)
        ));
    }
    io::print_hint("Set up tomorrow's budget, or review past days with `history`.");
    context.switch_view(View::Budget);
    views::render_draft(&context.session.draft, context.currency());
    Ok(())
}
