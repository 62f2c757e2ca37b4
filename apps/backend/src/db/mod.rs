//! PostgreSQL database operations

use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{Flashcard, Schedule, User};

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === User Repository ===

    /// Insert a new user with an already-hashed password.
    ///
    /// The unique index on username backs the duplicate check, so a
    /// concurrent registration of the same name still fails cleanly.
    pub async fn create_user(&self, username: &str, password_hash: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => ApiError::DuplicateUser,
            _ => ApiError::Database(e),
        })?;

        Ok(user)
    }

    /// Get user by username (case-sensitive)
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    // === Flashcard Repository ===

    /// Insert a new flashcard with its initial schedule
    pub async fn insert_flashcard(
        &self,
        user_id: Uuid,
        question: &str,
        answer: &str,
        schedule: Schedule,
    ) -> Result<Flashcard> {
        let card = sqlx::query_as::<_, Flashcard>(
            r#"
            INSERT INTO flashcards (user_id, question, answer, box, next_review_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, question, answer, box, next_review_date, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(question)
        .bind(answer)
        .bind(schedule.box_number as i32)
        .bind(schedule.next_review)
        .fetch_one(&self.pool)
        .await?;

        Ok(card)
    }

    /// Get all flashcards owned by a user
    pub async fn get_flashcards_by_user(&self, user_id: Uuid) -> Result<Vec<Flashcard>> {
        let cards = sqlx::query_as::<_, Flashcard>(
            r#"
            SELECT id, user_id, question, answer, box, next_review_date, created_at, updated_at
            FROM flashcards
            WHERE user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(cards)
    }

    /// Get flashcard by ID
    pub async fn get_flashcard(&self, card_id: Uuid) -> Result<Option<Flashcard>> {
        let card = sqlx::query_as::<_, Flashcard>(
            r#"
            SELECT id, user_id, question, answer, box, next_review_date, created_at, updated_at
            FROM flashcards
            WHERE id = $1
            "#,
        )
        .bind(card_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card)
    }

    /// Update flashcard content, leaving the schedule untouched.
    ///
    /// Absent fields keep their current value.
    pub async fn update_flashcard_content(
        &self,
        card_id: Uuid,
        question: Option<&str>,
        answer: Option<&str>,
    ) -> Result<Flashcard> {
        let card = sqlx::query_as::<_, Flashcard>(
            r#"
            UPDATE flashcards
            SET question = COALESCE($2, question),
                answer = COALESCE($3, answer),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, question, answer, box, next_review_date, created_at, updated_at
            "#,
        )
        .bind(card_id)
        .bind(question)
        .bind(answer)
        .fetch_one(&self.pool)
        .await?;

        Ok(card)
    }

    /// Write a flashcard's new schedule after a review.
    ///
    /// Single-statement update; concurrent reviews of the same card are
    /// last-writer-wins.
    pub async fn update_flashcard_schedule(
        &self,
        card_id: Uuid,
        schedule: Schedule,
    ) -> Result<Flashcard> {
        let card = sqlx::query_as::<_, Flashcard>(
            r#"
            UPDATE flashcards
            SET box = $2,
                next_review_date = $3,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, question, answer, box, next_review_date, created_at, updated_at
            "#,
        )
        .bind(card_id)
        .bind(schedule.box_number as i32)
        .bind(schedule.next_review)
        .fetch_one(&self.pool)
        .await?;

        Ok(card)
    }

    /// Delete a flashcard by ID
    pub async fn delete_flashcard(&self, card_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM flashcards
            WHERE id = $1
            "#,
        )
        .bind(card_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
