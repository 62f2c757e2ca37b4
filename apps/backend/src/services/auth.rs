//! Account registration, login, and session credentials.
//!
//! Credentials are stateless HS256 tokens embedding the user id; validation
//! is a pure signature/expiry check with no store lookup, and expiry is the
//! only invalidation (no revocation list).

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::Database;
use crate::error::{ApiError, Result};

/// Session credential validity window, in seconds.
const TOKEN_VALIDITY_SECS: i64 = 3600;

/// Token claims: the user id plus issue/expiry timestamps.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// Authentication service, constructed once at startup and held in
/// application state.
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(secret: &str, bcrypt_cost: u32) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            bcrypt_cost,
        }
    }

    /// Register a new account and issue a session credential for it.
    ///
    /// Fails with `DuplicateUser` if the username is taken.
    pub async fn register(&self, db: &Database, username: &str, password: &str) -> Result<String> {
        if username.trim().is_empty() {
            return Err(ApiError::Validation("username is required".to_string()));
        }
        if password.is_empty() {
            return Err(ApiError::Validation("password is required".to_string()));
        }

        if db.get_user_by_username(username).await?.is_some() {
            return Err(ApiError::DuplicateUser);
        }

        let password_hash = bcrypt::hash(password, self.bcrypt_cost)
            .map_err(|e| ApiError::Internal(format!("password hashing failed: {e}")))?;

        let user = db.create_user(username, &password_hash).await?;

        self.issue_token(user.id)
    }

    /// Verify a username/password pair and issue a session credential.
    ///
    /// Unknown username and wrong password are reported identically so the
    /// endpoint cannot be used to enumerate accounts.
    pub async fn login(&self, db: &Database, username: &str, password: &str) -> Result<String> {
        let user = db
            .get_user_by_username(username)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        let matches = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| ApiError::Internal(format!("password verification failed: {e}")))?;
        if !matches {
            return Err(ApiError::InvalidCredentials);
        }

        self.issue_token(user.id)
    }

    /// Sign a credential bound to the given user, valid for one hour.
    pub fn issue_token(&self, user_id: Uuid) -> Result<String> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + TOKEN_VALIDITY_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ApiError::Internal(format!("token signing failed: {e}")))
    }

    /// Validate a credential and return the embedded user id.
    ///
    /// Malformed, wrongly signed, and expired tokens all map to
    /// `InvalidCredential`.
    pub fn validate_token(&self, token: &str) -> Result<Uuid> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| ApiError::InvalidCredential(e.to_string()))?;

        Ok(data.claims.sub)
    }
}
