//! Test fixtures and factory functions for creating test data.

use cardbox_backend::models::{
    CreateFlashcardRequest, CredentialsRequest, UpdateFlashcardRequest,
};

/// Create a register/login request body.
pub fn credentials(username: &str, password: &str) -> CredentialsRequest {
    CredentialsRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

/// Create a flashcard creation request body.
pub fn create_flashcard_request(question: &str, answer: &str) -> CreateFlashcardRequest {
    CreateFlashcardRequest {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

/// Update body that submits a review outcome only.
pub fn review_update(correct: bool) -> UpdateFlashcardRequest {
    UpdateFlashcardRequest {
        correct: Some(correct),
        ..Default::default()
    }
}

/// Update body that edits content only.
pub fn content_update(question: Option<&str>, answer: Option<&str>) -> UpdateFlashcardRequest {
    UpdateFlashcardRequest {
        question: question.map(str::to_string),
        answer: answer.map(str::to_string),
        correct: None,
    }
}
