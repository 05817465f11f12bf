use super::take_yes_flag;
use crate::cli::core::{CommandError, CommandResult, ShellContext, View};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::selectors::resolve_reference;
use crate::cli::views;
use crate::currency::format_date;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("history", "List completed challenges", "history", cmd_history),
        CommandEntry::new("show", "Show one completed challenge", "show <n|id>", cmd_show),
        CommandEntry::new(
            "delete",
            "Delete a completed challenge",
            "delete <n|id> [--yes]",
            cmd_delete,
        ),
        CommandEntry::new(
            "delete-all",
            "Delete every completed challenge",
            "delete-all [--yes]",
            cmd_delete_all,
        ),
    ]
}

fn cmd_history(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.switch_view(View::History);
    let manager = &context.session.manager;
    views::render_history(manager.archive(), &manager.history_summary(), context.currency());
    Ok(())
}

fn cmd_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [reference] = args else {
        return Err(CommandError::InvalidArguments("usage: show <n|id>".into()));
    };
    let manager = &context.session.manager;
    let id = resolve_reference(manager.archive(), reference, "challenge")?;
    let challenge = manager
        .challenge(id)
        .ok_or(okz_core::CoreError::ChallengeNotFound(id))?;
    views::render_challenge(challenge, context.currency());
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (rest, yes) = take_yes_flag(args);
    let [reference] = rest.as_slice() else {
        return Err(CommandError::InvalidArguments(
            "usage: delete <n|id> [--yes]".into(),
        ));
    };
    let id = resolve_reference(context.session.manager.archive(), reference, "challenge")?;
    let label = context
        .session
        .manager
        .archive()
        .iter()
        .find(|challenge| challenge.id == id)
        .map(|challenge| format_date(challenge.date))
        .unwrap_or_else(|| id.to_string());
    if !context.confirm(&format!("Delete the challenge from {label}?"), yes)? {
        io::print_info("Nothing deleted.");
        return Ok(());
    }
    context.session.manager.delete_challenge(id)?;
    io::print_success(format!("Deleted the challenge from {label}."));
    Ok(())
}

fn cmd_delete_all(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (rest, yes) = take_yes_flag(args);
    if !rest.is_empty() {
        return Err(CommandError::InvalidArguments("usage: delete-all [--yes]".into()));
    }
    let count = context.session.manager.archive().len();
    if count == 0 {
        io::print_info("History is already empty.");
        return Ok(());
    }
    if !context.confirm(&format!("Delete all {count} completed challenges?"), yes)? {
        io::print_info("Nothing deleted.");
        return Ok(());
    }
    let removed = context.session.manager.delete_all_challenges();
    io::print_success(format!("Deleted {removed} challenges."));
    Ok(())
}
