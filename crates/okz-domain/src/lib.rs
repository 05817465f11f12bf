//! okz-domain
//!
//! Pure domain models (Challenge, Expense) and the derivations over them.
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod challenge;
pub mod common;
pub mod expense;

pub use challenge::*;
pub use common::*;
pub use expense::*;
