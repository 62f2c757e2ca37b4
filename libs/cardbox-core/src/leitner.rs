//! Leitner box spaced-repetition scheduler.
//!
//! A correct answer moves the card one box up; an incorrect answer resets
//! it to box 1. A card in box N comes due again N days after the review,
//! so the interval grows linearly with the box number. Boxes grow without
//! bound on consecutive correct answers.

use chrono::{DateTime, Duration, Utc};

use crate::types::{ReviewOutcome, Schedule};

/// The fixed Leitner scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Leitner;

impl Leitner {
    /// Schedule for a freshly created card: box 1, due immediately.
    pub fn initial_schedule(now: DateTime<Utc>) -> Schedule {
        Schedule {
            box_number: 1,
            next_review: now,
        }
    }

    /// Advance a card's schedule after a review.
    ///
    /// `current_box` must be >= 1 (the data-model invariant); the result
    /// is the new box and the new due date, `now + new_box` days.
    pub fn advance(current_box: u32, outcome: ReviewOutcome, now: DateTime<Utc>) -> Schedule {
        let box_number = match outcome {
            ReviewOutcome::Correct => current_box + 1,
            ReviewOutcome::Incorrect => 1,
        };

        Schedule {
            box_number,
            next_review: now + Duration::days(i64::from(box_number)),
        }
    }
}
