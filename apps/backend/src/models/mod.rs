//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Re-export shared types from cardbox-core
pub use cardbox_core::{Leitner, ReviewOutcome, Schedule};

// === Database Entity Types ===

/// Registered user account
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// bcrypt hash, never serialized in responses
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Flashcard owned by a single user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Flashcard {
    pub id: Uuid,
    pub user_id: Uuid,
    pub question: String,
    pub answer: String,
    #[serde(rename = "box")]
    #[sqlx(rename = "box")]
    pub box_number: i32,
    pub next_review_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Flashcard {
    /// Current scheduling state as the core type.
    pub fn schedule(&self) -> Schedule {
        Schedule {
            box_number: self.box_number as u32,
            next_review: self.next_review_date,
        }
    }
}

// === API Request/Response Types ===

/// Body shared by POST /register and POST /login
#[derive(Debug, Serialize, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateFlashcardRequest {
    pub question: String,
    pub answer: String,
}

/// Body for PUT /flashcards/:id.
///
/// `question`/`answer` edit content; `correct` submits a review outcome.
/// The two are independent: an absent `correct` leaves the schedule
/// untouched.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateFlashcardRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub correct: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteFlashcardResponse {
    pub msg: String,
}
