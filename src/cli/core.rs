//! Core CLI loop state, dispatch, and shell context helpers.

use std::{env, fmt, io, str::FromStr};

use dialoguer::theme::ColorfulTheme;
use okz_core::CoreError;
use rand::{rngs::StdRng, SeedableRng};
use strsim::levenshtein;
use tracing::debug;

pub use crate::errors::CliError;
use crate::{
    core::{paths, Session},
    errors::AppError,
};

use super::commands;
use super::io as cli_io;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};

pub const SCRIPT_ENV: &str = "OKOZUKAI_CLI_SCRIPT";
pub const SEED_ENV: &str = "OKOZUKAI_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Screen the shell is focused on. Commands work from any view; the view
/// decides the prompt and what `status`-like output is shown after changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Budget,
    Track,
    History,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            View::Budget => "budget",
            View::Track => "track",
            View::History => "history",
        };
        f.write_str(label)
    }
}

impl FromStr for View {
    type Err = CommandError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "budget" | "setup" => Ok(View::Budget),
            "track" | "today" => Ok(View::Track),
            "history" => Ok(View::History),
            other => Err(CommandError::InvalidArguments(format!(
                "unknown view `{other}` (expected budget, track or history)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub(crate) session: Session,
    pub(crate) view: View,
    pub(crate) theme: ColorfulTheme,
    pub(crate) rng: StdRng,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let home = paths::app_home_dir().map_err(AppError::from)?;
        let session = Session::open(home)?;
        Ok(Self::with_session(mode, session, rng_from_env()))
    }

    pub(crate) fn with_session(mode: CliMode, session: Session, rng: StdRng) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        output::set_color_enabled(session.config.ui_color_enabled && mode == CliMode::Interactive);

        let view = if session.manager.active().is_some() {
            View::Track
        } else {
            View::Budget
        };

        Self {
            mode,
            registry,
            session,
            view,
            theme: ColorfulTheme::default(),
            rng,
            running: true,
        }
    }

    pub(crate) fn prompt(&self) -> String {
        format!("okozukai[{}]> ", self.view)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn switch_view(&mut self, view: View) {
        if self.view != view {
            debug!(from = %self.view, to = %view, "view changed");
            self.view = view;
        }
    }

    pub(crate) fn currency(&self) -> &str {
        self.session.currency()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match shell_words::split(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.print_warning(&err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, &tokens[0], &args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = closest_command(self.registry.names(), input) {
            cli_io::print_info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true)
            .map_err(|err| CliError::Io(io::Error::new(io::ErrorKind::Other, err.to_string())))
    }

    /// Asks before a destructive change. Script mode never prompts, so
    /// callers there must pass `--yes`.
    pub(crate) fn confirm(&self, prompt: &str, assume_yes: bool) -> Result<bool, CommandError> {
        if assume_yes {
            return Ok(true);
        }
        match self.mode {
            CliMode::Interactive => cli_io::confirm_action(&self.theme, prompt, false),
            CliMode::Script => Err(CommandError::InvalidArguments(
                "pass --yes to confirm destructive commands in script mode".into(),
            )),
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                self.print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Core(CoreError::NoActiveChallenge) => {
                self.print_error("No challenge in progress.");
                self.print_hint("Set a range with `range <min> <max>`, then `roll` and `start`.");
                Ok(())
            }
            CommandError::Core(CoreError::Conflict(message)) => {
                self.print_error(&format!("A challenge is already running: {message}"));
                self.print_hint("Finish it with `complete` before starting another.");
                Ok(())
            }
            other => {
                self.print_error(&other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }

    pub(crate) fn print_hint(&self, message: &str) {
        cli_io::print_hint(message);
    }
}

fn closest_command<'a>(names: impl Iterator<Item = &'a str>, input: &str) -> Option<&'a str> {
    let needle = input.to_ascii_lowercase();
    names
        .map(|name| (levenshtein(name, &needle), name))
        .filter(|(distance, _)| *distance <= 3)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name)
}

fn rng_from_env() -> StdRng {
    match env::var(SEED_ENV).ok().and_then(|raw| raw.trim().parse::<u64>().ok()) {
        Some(seed) => {
            debug!(seed, "using seeded budget generator");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
pub(crate) fn process_script(
    session: Session,
    seed: u64,
    lines: &[&str],
) -> Result<ShellContext, CliError> {
    let mut app = ShellContext::with_session(CliMode::Script, session, StdRng::seed_from_u64(seed));
    for line in lines {
        match app.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => app.report_error(err)?,
        }
    }
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use okz_core::Clock;
    use tempfile::TempDir;

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> chrono::DateTime<Utc> {
            Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap()
        }
    }

    fn session(dir: &TempDir) -> Session {
        Session::open_with_clock(dir.path().to_path_buf(), Arc::new(FixedClock)).unwrap()
    }

    #[test]
    fn view_parses_aliases() {
        assert_eq!("Track".parse::<View>().unwrap(), View::Track);
        assert_eq!("setup".parse::<View>().unwrap(), View::Budget);
        assert!("ledger".parse::<View>().is_err());
    }

    #[test]
    fn closest_command_respects_distance() {
        let names = ["roll", "range", "history"];
        assert_eq!(closest_command(names.iter().copied(), "rol"), Some("roll"));
        assert_eq!(closest_command(names.iter().copied(), "HISTROY"), Some("history"));
        assert_eq!(closest_command(names.iter().copied(), "zzzzzzzz"), None);
    }

    #[test]
    fn script_runs_a_full_day() {
        let dir = TempDir::new().unwrap();
        let app = process_script(
            session(&dir),
            7,
            &[
                "range 1000 1000",
                "roll",
                "start",
                "add 300 lunch",
                "add 800 \"late taxi\"",
                "complete",
            ],
        )
        .unwrap();

        let manager = &app.session.manager;
        assert!(manager.active().is_none());
        assert_eq!(manager.archive().len(), 1);
        let archived = &manager.archive()[0];
        assert_eq!(archived.actual_budget, 1000);
        assert_eq!(archived.expenses[1].description, "late taxi");
        assert_eq!(archived.remaining(), -100.0);
        assert_eq!(app.view, View::Budget);
    }

    #[test]
    fn start_without_roll_keeps_budget_view() {
        let dir = TempDir::new().unwrap();
        let app = process_script(session(&dir), 1, &["start"]).unwrap();
        assert!(app.session.manager.active().is_none());
        assert_eq!(app.view, View::Budget);
    }

    #[test]
    fn changing_range_after_roll_requires_new_roll() {
        let dir = TempDir::new().unwrap();
        let app = process_script(
            session(&dir),
            3,
            &["range 2000 3000", "roll", "range 2000 2500", "start"],
        )
        .unwrap();
        assert!(app.session.manager.active().is_none());
        assert_eq!(app.session.draft.resolved(), None);
    }

    #[test]
    fn destructive_commands_need_yes_in_script_mode() {
        let dir = TempDir::new().unwrap();
        let app = process_script(
            session(&dir),
            5,
            &["range 1000 1000", "roll", "start", "complete", "delete-all"],
        )
        .unwrap();
        assert_eq!(app.session.manager.archive().len(), 1);

        let mut app = app;
        app.process_line("delete-all --yes").unwrap();
        assert!(app.session.manager.archive().is_empty());
    }

    #[test]
    fn exit_stops_the_script() {
        let dir = TempDir::new().unwrap();
        let app = process_script(session(&dir), 5, &["exit", "range 1000 1000", "roll"]).unwrap();
        assert_eq!(app.session.draft.resolved(), None);
    }
}
