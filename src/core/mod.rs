//! Application wiring around `okz-core`: home directory, clock and session.

pub mod paths;
pub mod session;
pub mod system_clock;

pub use session::Session;
pub use system_clock::SystemClock;
