pub mod budget;
pub mod expense;
pub mod history;
pub mod system;

use crate::cli::core::{CommandError, ShellContext, View};
use crate::cli::registry::CommandRegistry;
use crate::cli::views;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in system::definitions()
        .into_iter()
        .chain(budget::definitions())
        .chain(expense::definitions())
        .chain(history::definitions())
    {
        registry.register(entry);
    }
}

/// Renders whatever the current view shows.
pub(crate) fn show_current_view(context: &ShellContext) {
    let currency = context.currency();
    match context.view {
        View::Budget => views::render_draft(&context.session.draft, currency),
        View::Track => match context.session.manager.active() {
            Some(challenge) => views::render_status(challenge, currency),
            None => views::render_draft(&context.session.draft, currency),
        },
        View::History => {
            let manager = &context.session.manager;
            views::render_history(manager.archive(), &manager.history_summary(), currency)
        }
    }
}

pub(crate) fn parse_whole(raw: &str, what: &str) -> Result<u32, CommandError> {
    raw.trim().replace(',', "").parse::<u32>().map_err(|_| {
        CommandError::InvalidArguments(format!("{what} must be a whole number, got `{raw}`"))
    })
}

pub(crate) fn parse_amount(raw: &str) -> Result<f64, CommandError> {
    raw.trim()
        .replace(',', "")
        .parse::<f64>()
        .map_err(|_| {
            CommandError::InvalidArguments(format!("amount must be a number, got `{raw}`"))
        })
}

/// Splits a trailing `--yes` / `-y` flag off the arguments.
pub(crate) fn take_yes_flag<'a>(args: &[&'a str]) -> (Vec<&'a str>, bool) {
    let mut yes = false;
    let rest = args
        .iter()
        .copied()
        .filter(|arg| {
            let flag = matches!(*arg, "--yes" | "-y");
            yes |= flag;
            !flag
        })
        .collect();
    (rest, yes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_accept_grouping() {
        assert_eq!(parse_whole("3,000", "min").unwrap(), 3000);
        assert!(parse_whole("-1", "min").is_err());
        assert!(parse_whole("1.5", "min").is_err());
    }

    #[test]
    fn amounts_allow_decimals() {
        assert_eq!(parse_amount("12.5").unwrap(), 12.5);
        assert_eq!(parse_amount("1,200").unwrap(), 1200.0);
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn yes_flag_is_extracted() {
        let (rest, yes) = take_yes_flag(&["2", "--yes"]);
        assert_eq!(rest, vec!["2"]);
        assert!(yes);
        let (rest, yes) = take_yes_flag(&["2"]);
        assert_eq!(rest, vec!["2"]);
        assert!(!yes);
    }
}
