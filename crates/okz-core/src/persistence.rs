//! Best-effort persistence of the archive and the active challenge.
//!
//! Writes and reads never fail from the caller's point of view: store and
//! serialization errors are logged and replaced with empty defaults. The
//! in-memory state held by [`crate::ChallengeManager`] stays authoritative.

use std::{fmt, sync::Arc};

use okz_domain::Challenge;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, warn};

use crate::{CoreError, KeyValueStore};

pub const ARCHIVE_KEY: &str = "okozukai-challenges";
pub const ACTIVE_KEY: &str = "okozukai-current-challenge";

/// The two durable records kept by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Archive,
    Active,
}

impl Slot {
    pub fn key(self) -> &'static str {
        match self {
            Slot::Archive => ARCHIVE_KEY,
            Slot::Active => ACTIVE_KEY,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone)]
pub struct ChallengeRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ChallengeRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn save_archive(&self, archive: &[Challenge]) {
        self.save(Slot::Archive, archive);
    }

    /// Writes the active slot; `None` is stored as JSON `null`.
    pub fn save_active(&self, active: Option<&Challenge>) {
        self.save(Slot::Active, &active);
    }

    pub fn load_archive(&self) -> Vec<Challenge> {
        self.load::<Vec<Challenge>>(Slot::Archive).unwrap_or_default()
    }

    pub fn load_active(&self) -> Option<Challenge> {
        self.load::<Option<Challenge>>(Slot::Active).flatten()
    }

    fn save<T: Serialize + ?Sized>(&self, slot: Slot, value: &T) {
        match self.try_save(slot, value) {
            Ok(bytes) => debug!(slot = %slot, bytes, "persisted slot"),
            Err(err) => error!(slot = %slot, error = %err, "failed to persist slot"),
        }
    }

    fn try_save<T: Serialize + ?Sized>(&self, slot: Slot, value: &T) -> Result<usize, CoreError> {
        let json = serde_json::to_string(value).map_err(|err| CoreError::Serde(err.to_string()))?;
        self.store.set(slot.key(), &json)?;
        Ok(json.len())
    }

    fn load<T: DeserializeOwned>(&self, slot: Slot) -> Option<T> {
        match self.try_load(slot) {
            Ok(value) => value,
            Err(err) => {
                error!(slot = %slot, error = %err, "failed to load slot, using empty default");
                None
            }
        }
    }

    fn try_load<T: DeserializeOwned>(&self, slot: Slot) -> Result<Option<T>, CoreError> {
        let Some(raw) = self.store.get(slot.key())? else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            warn!(slot = %slot, "slot is blank, treating as missing");
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| CoreError::Serde(err.to_string()))
    }
}
