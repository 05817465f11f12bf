use dirs::home_dir;
use std::{env, fs, io, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".okozukai";
pub const HOME_ENV: &str = "OKOZUKAI_HOME";

/// Application home, `$OKOZUKAI_HOME` or `~/.okozukai`. Created on demand.
pub fn app_home_dir() -> io::Result<PathBuf> {
    let dir = match env::var_os(HOME_ENV) {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME),
    };
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
