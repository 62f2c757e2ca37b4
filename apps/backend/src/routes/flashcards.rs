//! Flashcard CRUD and review endpoints

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{
    CreateFlashcardRequest, DeleteFlashcardResponse, Flashcard, Leitner, ReviewOutcome,
    UpdateFlashcardRequest,
};
use crate::routes::auth::AuthenticatedUser;
use crate::AppState;

/// Fetch a card by id and enforce that the caller owns it.
///
/// Missing card is NotFound; someone else's card is Forbidden.
async fn fetch_owned(state: &AppState, card_id: Uuid, user_id: Uuid) -> Result<Flashcard> {
    let card = state
        .db
        .get_flashcard(card_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("flashcard {card_id}")))?;

    if card.user_id != user_id {
        return Err(ApiError::Forbidden);
    }

    Ok(card)
}

/// POST /flashcards
/// Creates a card in box 1, due immediately
pub async fn create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(payload): Json<CreateFlashcardRequest>,
) -> Result<Json<Flashcard>> {
    if payload.question.trim().is_empty() {
        return Err(ApiError::Validation("question is required".to_string()));
    }
    if payload.answer.trim().is_empty() {
        return Err(ApiError::Validation("answer is required".to_string()));
    }

    let schedule = Leitner::initial_schedule(Utc::now());
    let card = state
        .db
        .insert_flashcard(auth.user_id, &payload.question, &payload.answer, schedule)
        .await?;

    Ok(Json(card))
}

/// GET /flashcards
/// Lists all cards owned by the caller
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<Flashcard>>> {
    let cards = state.db.get_flashcards_by_user(auth.user_id).await?;
    Ok(Json(cards))
}

/// GET /flashcards/:id
pub async fn get(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(card_id): Path<Uuid>,
) -> Result<Json<Flashcard>> {
    let card = fetch_owned(&state, card_id, auth.user_id).await?;
    Ok(Json(card))
}

/// PUT /flashcards/:id
/// Edits content and/or submits a review outcome.
pub async fn update(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(card_id): Path<Uuid>,
    Json(payload): Json<UpdateFlashcardRequest>,
) -> Result<Json<Flashcard>> {
    let mut card = fetch_owned(&state, card_id, auth.user_id).await?;

    if payload.question.is_some() || payload.answer.is_some() {
        card = state
            .db
            .update_flashcard_content(
                card_id,
                payload.question.as_deref(),
                payload.answer.as_deref(),
            )
            .await?;
    }

    if let Some(correct) = payload.correct {
        let schedule = Leitner::advance(
            card.schedule().box_number,
            ReviewOutcome::from_correct(correct),
            Utc::now(),
        );
        card = state.db.update_flashcard_schedule(card_id, schedule).await?;
    }

    Ok(Json(card))
}

/// DELETE /flashcards/:id
pub async fn delete(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(card_id): Path<Uuid>,
) -> Result<Json<DeleteFlashcardResponse>> {
    fetch_owned(&state, card_id, auth.user_id).await?;

    state.db.delete_flashcard(card_id).await?;

    Ok(Json(DeleteFlashcardResponse {
        msg: "Flashcard deleted".to_string(),
    }))
}
