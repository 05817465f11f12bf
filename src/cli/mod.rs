pub mod commands;
pub(crate) mod core;
pub mod io;
pub mod output;
pub mod registry;
pub mod selectors;
mod shell;
pub mod views;

pub use self::core::{CliMode, View};
pub use shell::run_cli;
