//! Session types for the back-office operator.
//!
//! These types represent a signed-in operator as carried by the session
//! token. They have **no provider dependencies** - any token scheme can
//! populate them via the `SessionTokens` port.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Operator identity carried by a validated session token.
///
/// This is a **domain type**: it holds only the claims the back office
/// actually renders, not whatever the commerce API knows about the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Account identifier in the commerce platform.
    pub id: i64,

    /// Email address the operator signed in with.
    pub email: String,

    /// Display name if the account has one.
    pub name: Option<String>,
}

impl SessionUser {
    pub fn new(id: i64, email: impl Into<String>, name: Option<String>) -> Self {
        Self {
            id,
            email: email.into(),
            name,
        }
    }

    /// Returns the display name, or the email as fallback.
    pub fn name_or_email(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Sign-in credentials forwarded verbatim to the commerce API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Session token errors, described from the application's perspective.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is malformed or its signature does not verify.
    #[error("Invalid session token")]
    InvalidToken,

    /// The token verified but its expiry has passed.
    #[error("Session expired")]
    TokenExpired,

    /// A token could not be produced at sign-in.
    #[error("Could not issue session token: {0}")]
    Issuance(String),
}

impl AuthError {
    pub fn issuance(message: impl Into<String>) -> Self {
        Self::Issuance(message.into())
    }

    /// Returns true if the holder of this token must sign in again.
    ///
    /// Invalid and expired tokens are deliberately indistinguishable at the
    /// gate; both land here.
    pub fn requires_sign_in(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}
