//! Mock session token adapter for testing.
//!
//! Implements the `SessionTokens` port over an in-memory map, avoiding
//! real token cryptography in tests that only care about gate behavior.
//!
//! # Example
//!
//! ```ignore
//! use shopdesk::adapters::auth::MockSessions;
//!
//! let sessions = MockSessions::new().with_test_session("valid-token", 7);
//!
//! let user = sessions.validate("valid-token").await.unwrap();
//! assert_eq!(user.id, 7);
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::session::{AuthError, SessionUser};
use crate::ports::SessionTokens;

/// Mock session token store for testing.
///
/// Tokens not in the map validate to `InvalidToken`. Every `validate`
/// call is counted so tests can assert whether the gate consulted the
/// validator at all.
#[derive(Debug, Default)]
pub struct MockSessions {
    /// Map of valid tokens to the operators they were issued to
    sessions: RwLock<HashMap<String, SessionUser>>,
    /// Optional error to return for all validations (for error testing)
    force_error: RwLock<Option<AuthError>>,
    /// Number of `validate` calls observed
    validate_calls: AtomicUsize,
    /// Counter used to mint distinct mock tokens
    issued: AtomicUsize,
}

impl MockSessions {
    /// Creates a new empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to an operator.
    pub fn with_session(self, token: impl Into<String>, user: SessionUser) -> Self {
        self.sessions.write().unwrap().insert(token.into(), user);
        self
    }

    /// Adds a valid token with a simple test operator.
    pub fn with_test_session(self, token: impl Into<String>, id: i64) -> Self {
        let user = SessionUser::new(
            id,
            format!("user{}@test.example.com", id),
            Some(format!("Test User {}", id)),
        );
        self.with_session(token, user)
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap() = None;
    }

    /// Removes a token, making it invalid.
    pub fn remove_session(&self, token: &str) {
        self.sessions.write().unwrap().remove(token);
    }

    /// Returns the number of registered valid tokens.
    pub fn session_count(&self) -> usize {
        self.sessions.read().unwrap().len()
    }

    /// Returns how many times `validate` has been called.
    pub fn validate_calls(&self) -> usize {
        self.validate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionTokens for MockSessions {
    async fn issue(&self, user: &SessionUser) -> Result<String, AuthError> {
        let n = self.issued.fetch_add(1, Ordering::SeqCst);
        let token = format!("mock-token-{}", n);
        self.sessions
            .write()
            .unwrap()
            .insert(token.clone(), user.clone());
        Ok(token)
    }

    async fn validate(&self, token: &str) -> Result<SessionUser, AuthError> {
        self.validate_calls.fetch_add(1, Ordering::SeqCst);

        // Check for forced error
        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }

        self.sessions
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
