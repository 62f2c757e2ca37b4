//! Core types for the cardbox scheduler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Binary recall result submitted when a card is reviewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewOutcome {
    Correct,
    Incorrect,
}

impl ReviewOutcome {
    /// Map the boolean the HTTP surface carries to an outcome.
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// A card's scheduling state: its Leitner box and when it is next due.
///
/// The box is always >= 1; higher box means a longer interval before the
/// next review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(rename = "box")]
    pub box_number: u32,
    pub next_review: DateTime<Utc>,
}
