use std::str::FromStr;

use okz_core::Bound;

use super::parse_whole;
use crate::cli::core::{CommandError, CommandResult, ShellContext, View};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::views;
use crate::currency::format_currency;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "range",
            "Set the budget range to draw from",
            "range <min> <max>",
            cmd_range,
        ),
        CommandEntry::new("lock", "Lock a range bound", "lock <min|max>", cmd_lock),
        CommandEntry::new("unlock", "Unlock a range bound", "unlock <min|max>", cmd_unlock),
        CommandEntry::new("roll", "Draw today's budget from the range", "roll", cmd_roll),
        CommandEntry::new("start", "Start a challenge with the rolled budget", "start", cmd_start),
        CommandEntry::new("budget", "Show the budget setup", "budget", cmd_budget),
    ]
}

fn cmd_range(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [min, max] = args else {
        return Err(CommandError::InvalidArguments("usage: range <min> <max>".into()));
    };
    let min = parse_whole(min, "minimum")?;
    let max = parse_whole(max, "maximum")?;
    context.session.draft.set_range(min, max)?;
    context.switch_view(View::Budget);
    views::render_draft(&context.session.draft, context.currency());
    Ok(())
}

fn parse_bound(args: &[&str], usage: &str) -> Result<Bound, CommandError> {
    match args {
        [bound] => Ok(Bound::from_str(bound)?),
        _ => Err(CommandError::InvalidArguments(format!("usage: {usage}"))),
    }
}

fn cmd_lock(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let bound = parse_bound(args, "lock <min|max>")?;
    context.session.draft.lock(bound);
    io::print_success(format!("Locked {bound}."));
    Ok(())
}

fn cmd_unlock(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let bound = parse_bound(args, "unlock <min|max>")?;
    context.session.draft.unlock(bound);
    io::print_success(format!("Unlocked {bound}."));
    Ok(())
}

fn cmd_roll(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let ShellContext { session, rng, .. } = context;
    let budget = session.draft.roll(rng);
    io::print_success(format!(
        "Today's budget: {}",
        format_currency(budget.into(), session.currency())
    ));
    io::print_hint("Use `start` to begin, or `roll` again.");
    Ok(())
}

fn cmd_start(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let challenge = context.session.start_challenge()?;
    io::print_success(format!(
        "Challenge started with {}.",
        format_currency(challenge.actual_budget.into(), context.currency())
    ));
    context.switch_view(View::Track);
    views::render_status(&challenge, context.currency());
    Ok(())
}

fn cmd_budget(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.switch_view(View::Budget);
    views::render_draft(&context.session.draft, context.currency());
    Ok(())
}
