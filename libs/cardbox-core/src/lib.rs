//! Core scheduling library shared by the cardbox backend.
//!
//! Provides:
//! - The Leitner box scheduler (initial schedule, advance on review outcome)
//! - Shared types (Schedule, ReviewOutcome)
//!
//! Everything in this crate is pure: no I/O, no persistence, no clock
//! access. Callers supply `now` so the arithmetic stays unit-testable.

pub mod leitner;
pub mod types;

pub use leitner::Leitner;
pub use types::{ReviewOutcome, Schedule};
