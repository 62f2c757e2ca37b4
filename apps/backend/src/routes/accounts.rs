//! Registration and login endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::{CredentialsRequest, TokenResponse};
use crate::AppState;

/// POST /register
/// Creates a new account and returns a session token
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>> {
    let token = state
        .auth
        .register(&state.db, &payload.username, &payload.password)
        .await?;

    tracing::info!("Registered new user: {}", payload.username);

    Ok(Json(TokenResponse { token }))
}

/// POST /login
/// Verifies credentials and returns a session token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>> {
    let token = state
        .auth
        .login(&state.db, &payload.username, &payload.password)
        .await?;

    Ok(Json(TokenResponse { token }))
}
