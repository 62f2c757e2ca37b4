//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up test environment with database
//! - Helper functions for creating test users
//! - Authentication helpers
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set DATABASE_URL).

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use uuid::Uuid;

use cardbox_backend::build_router;
use cardbox_backend::db::Database;
use cardbox_backend::services::auth::AuthService;
use cardbox_backend::AppState;

/// bcrypt cost for tests, minimum to keep hashing fast.
const TEST_BCRYPT_COST: u32 = 4;

/// Test context containing database connection and test server.
///
/// Use this to set up integration tests with a real database connection.
/// Requires DATABASE_URL environment variable to be set.
pub struct TestContext {
    pub db: Arc<Database>,
    pub auth: Arc<AuthService>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations().await.expect("Failed to run migrations");

        let db = Arc::new(db);
        let auth = Arc::new(AuthService::new(
            &std::env::var("JWT_SECRET").unwrap_or_else(|_| "integration-test-secret".into()),
            TEST_BCRYPT_COST,
        ));

        let state = AppState {
            db: db.clone(),
            auth: auth.clone(),
        };

        let app = build_router(state);

        Self { db, auth, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Register a test user and return its ID and a session token.
    pub async fn create_test_user(&self, username: &str, password: &str) -> (Uuid, String) {
        let token = self
            .auth
            .register(&self.db, username, password)
            .await
            .expect("Failed to register test user");
        let user = self
            .db
            .get_user_by_username(username)
            .await
            .expect("Failed to query test user")
            .expect("Registered user missing");
        (user.id, token)
    }

    /// Random username so concurrent test runs never collide.
    pub fn unique_username(prefix: &str) -> String {
        format!("{}-{}", prefix, Uuid::new_v4())
    }

    /// Format authorization header value.
    pub fn auth_header_value(token: &str) -> String {
        format!("Bearer {}", token)
    }

    /// Clean up test data for a user.
    ///
    /// Call this after tests to remove test data.
    pub async fn cleanup_user(&self, user_id: Uuid) {
        // Delete in order due to foreign keys
        let _ = sqlx::query("DELETE FROM flashcards WHERE user_id = $1")
            .bind(user_id)
            .execute(self.db.pool())
            .await;

        let _ = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(self.db.pool())
            .await;
    }
}
