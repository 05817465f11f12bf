use super::show_current_view;
use crate::cli::core::{CommandError, CommandResult, ShellContext, View};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::currency::format_currency;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new(
            "view",
            "Switch between the budget, track and history views",
            "view <budget|track|history>",
            cmd_view,
        ),
        CommandEntry::new("config", "Show preferences and data paths", "config", cmd_config),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
        CommandEntry::new("quit", "Exit the shell", "quit", cmd_exit),
    ]
}

fn print_overview(registry: &CommandRegistry) {
    output_section("Available commands");
    for entry in registry.list() {
        io::print_info(format!("  {:<12} {}", entry.name, entry.description));
    }
    io::print_info("Use `help <command>` for details.");
}

fn print_command(entry: &CommandEntry) {
    output_section(format!("Help: {}", entry.name));
    io::print_info(format!("  Description: {}", entry.description));
    io::print_info(format!("  Usage: {}", entry.usage));
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.command(&name.to_lowercase()) {
            Some(entry) => print_command(entry),
            None => context.suggest_command(name),
        }
        return Ok(());
    }
    print_overview(&context.registry);
    Ok(())
}

fn cmd_view(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {}
        [name] => {
            let view: View = name.parse()?;
            context.switch_view(view);
        }
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: view <budget|track|history>".into(),
            ))
        }
    }
    show_current_view(context);
    Ok(())
}

fn cmd_config(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let session = &context.session;
    let config = &session.config;
    let limits = session.draft.limits();
    output_section("Configuration");
    io::print_info(format!("  Config file : {}", session.config_path().display()));
    io::print_info(format!("  Home        : {}", session.home().display()));
    io::print_info(format!("  Data dir    : {}", session.data_dir().display()));
    io::print_info(format!("  Locale      : {}", config.locale));
    io::print_info(format!("  Currency    : {}", config.currency));
    io::print_info(format!(
        "  Envelope    : {} .. {}",
        format_currency(limits.floor().into(), &config.currency),
        format_currency(limits.ceiling().into(), &config.currency)
    ));
    io::print_info(format!(
        "  Colors      : {}",
        if config.ui_color_enabled { "on" } else { "off" }
    ));
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output_section(format!("Okozukai {}", meta.version));
    io::print_info(format!("  Build hash : {}", meta.git_hash));
    io::print_info(format!("  Built at   : {}", meta.timestamp));
    io::print_info(format!("  Profile    : {}", meta.profile));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
