//! okz-core
//!
//! Challenge lifecycle, budget randomizer and the persistence adapter.
//! Depends on okz-domain. No CLI, no terminal I/O, no filesystem access.

pub mod challenge_manager;
pub mod draft;
pub mod error;
pub mod history_service;
pub mod persistence;
pub mod randomizer;
pub mod storage;
pub mod time;

pub use challenge_manager::ChallengeManager;
pub use draft::*;
pub use error::CoreError;
pub use history_service::*;
pub use persistence::*;
pub use randomizer::*;
pub use storage::*;
pub use time::Clock;
