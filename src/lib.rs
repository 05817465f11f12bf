#![doc(test(attr(deny(warnings))))]

//! Okozukai tracks a daily spending allowance: draw a budget from a range,
//! log expenses against it, and keep an archive of completed days.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Okozukai tracing initialized.");
    });
}
