mod common;

use std::{fs, sync::Arc};

use chrono::{DateTime, TimeZone, Utc};
use okozukai::core::Session;
use okz_config::{Config, ConfigManager};
use okz_core::{Clock, CoreError};

use common::temp_home;

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap(),
    ))
}

#[test]
fn start_requires_a_rolled_budget() {
    let home = temp_home();
    let mut session = Session::open_with_clock(home, clock()).unwrap();
    assert!(matches!(
        session.start_challenge(),
        Err(CoreError::Validation(_))
    ));
    assert!(session.manager.active().is_none());
}

#[test]
fn started_challenge_uses_draft_and_clears_resolution() {
    let home = temp_home();
    let mut session = Session::open_with_clock(home.clone(), clock()).unwrap();
    session.draft.set_range(1200, 1200).unwrap();
    session.draft.roll(&mut rand::thread_rng());

    let challenge = session.start_challenge().unwrap();
    assert_eq!(challenge.actual_budget, 1200);
    assert_eq!(challenge.min_budget, 1200);
    assert_eq!(challenge.date, Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap());
    assert_eq!(session.draft.resolved(), None);

    let reopened = Session::open_with_clock(home, clock()).unwrap();
    assert_eq!(reopened.manager.active(), Some(&challenge));
}

#[test]
fn config_data_dir_and_preferences_are_honoured() {
    let home = temp_home();
    let data_dir = home.join("elsewhere");
    let mut config = Config::default();
    config.data_dir = Some(data_dir.clone());
    config.budget.default_min = 2_000;
    config.budget.default_max = 2_000;
    ConfigManager::with_base_dir(home.clone())
        .unwrap()
        .save(&config)
        .unwrap();

    let mut session = Session::open_with_clock(home, clock()).unwrap();
    assert_eq!(session.data_dir(), data_dir.as_path());
    assert_eq!(session.draft.range().min(), 2_000);

    session.draft.roll(&mut rand::thread_rng());
    session.start_challenge().unwrap();
    assert!(data_dir.join("okozukai-current-challenge.json").exists());
}

#[test]
fn corrupt_archive_starts_empty() {
    let home = temp_home();
    let data = home.join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("okozukai-challenges.json"), "{not json").unwrap();

    let session = Session::open_with_clock(home, clock()).unwrap();
    assert!(session.manager.archive().is_empty());
    assert!(session.manager.active().is_none());
}

#[test]
fn second_start_conflicts_and_keeps_the_draft() {
    let home = temp_home();
    let mut session = Session::open_with_clock(home, clock()).unwrap();
    session.draft.set_range(1000, 1000).unwrap();
    session.draft.roll(&mut rand::thread_rng());
    let first = session.start_challenge().unwrap();

    session.draft.roll(&mut rand::thread_rng());
    assert!(matches!(session.start_challenge(), Err(CoreError::Conflict(_))));
    assert_eq!(session.draft.resolved(), Some(1000));
    assert_eq!(session.manager.active().map(|c| c.id), Some(first.id));
}
