use std::io;

use okz_config::ConfigError;
use okz_core::CoreError;
use rustyline::error::ReadlineError;
use thiserror::Error;

/// Unified error type for session setup and the core layers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => AppError::Io(io),
            ConfigError::Serde(message) => AppError::Config(message),
        }
    }
}

/// Fatal shell errors that end the CLI loop.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
}
