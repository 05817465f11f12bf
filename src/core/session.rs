use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use okz_config::{Config, ConfigManager};
use okz_core::{BudgetDraft, ChallengeManager, ChallengeRepository, Clock, CoreError};
use okz_domain::Challenge;
use okz_storage_json::JsonFileStore;
use tracing::info;

use crate::{config, errors::AppError};

use super::SystemClock;

/// Everything the shell operates on: the loaded challenges, the budget
/// draft being edited and the user's preferences.
pub struct Session {
    pub manager: ChallengeManager,
    pub draft: BudgetDraft,
    pub config: Config,
    config_manager: ConfigManager,
    home: PathBuf,
    data_dir: PathBuf,
}

impl Session {
    /// Opens the session rooted at `home` using the system clock.
    pub fn open(home: PathBuf) -> Result<Self, AppError> {
        Self::open_with_clock(home, Arc::new(SystemClock))
    }

    pub fn open_with_clock(home: PathBuf, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        let config_manager = config::manager_with_base(home.clone())?;
        let config = config_manager.load()?;
        let data_dir = config.resolve_data_dir(&home);
        let store = JsonFileStore::new(data_dir.clone())?;
        let repository = ChallengeRepository::new(Arc::new(store));
        let manager = ChallengeManager::load(repository, clock);
        let draft = config::initial_draft(&config)?;
        info!(
            home = %home.display(),
            data_dir = %data_dir.display(),
            archived = manager.archive().len(),
            active = manager.active().is_some(),
            "session opened"
        );
        Ok(Self {
            manager,
            draft,
            config,
            config_manager,
            home,
            data_dir,
        })
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> &Path {
        self.config_manager.config_path()
    }

    pub fn currency(&self) -> &str {
        &self.config.currency
    }

    /// Starts a challenge with the drafted range and its resolved budget.
    pub fn start_challenge(&mut self) -> Result<Challenge, CoreError> {
        if let Some(current) = self.manager.active() {
            return Err(CoreError::Conflict(format!(
                "challenge {} is still in progress",
                current.id
            )));
        }
        let actual = self.draft.resolved().ok_or_else(|| {
            CoreError::Validation("roll a budget before starting the challenge".into())
        })?;
        let range = self.draft.range();
        let challenge = self
            .manager
            .create_challenge(range.min(), range.max(), actual)?;
        self.draft.discard_resolution();
        Ok(challenge)
    }
}
