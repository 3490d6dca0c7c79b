//! Session token port for issuing and validating operator sessions.
//!
//! The gate middleware validates tokens through this port and the sign-in
//! flow issues them; neither knows the token scheme. The production
//! implementation signs JWTs, tests use an in-memory mock.

use async_trait::async_trait;

use crate::domain::session::{AuthError, SessionUser};

/// Issues and validates the session tokens carried in the session cookie.
///
/// # Contract
///
/// Implementations must:
/// - Produce tokens that round-trip through `validate` until their TTL lapses
/// - Return `AuthError::InvalidToken` for malformed or tampered tokens
/// - Return `AuthError::TokenExpired` for well-formed tokens past expiry
/// - Never panic on attacker-controlled token input
#[async_trait]
pub trait SessionTokens: Send + Sync {
    /// Issue a fresh token embedding the operator's identity.
    async fn issue(&self, user: &SessionUser) -> Result<String, AuthError>;

    /// Validate a raw token and recover the operator it was issued to.
    async fn validate(&self, token: &str) -> Result<SessionUser, AuthError>;
}
