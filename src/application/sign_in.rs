//! Sign-in command handler.
//!
//! Delegates credential checking to the commerce API and, on success,
//! turns the returned account into a session token. The HTTP layer only
//! has to set the cookie or re-render the form.

use std::sync::Arc;

use crate::domain::action::ActionResult;
use crate::domain::session::{Credentials, SessionUser};
use crate::ports::{CommerceApi, SessionTokens};

/// Shown when the commerce API cannot be reached or a token cannot be
/// issued. Deliberately vague; the details go to the log.
const GENERIC_SIGN_IN_ERROR: &str = "Could not sign in. Please try again.";

/// Outcome of a sign-in attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SignInOutcome {
    /// Credentials accepted; `token` is ready to be set as the session
    /// cookie.
    SignedIn { token: String, user: SessionUser },
    /// Credentials rejected or the attempt failed; `message` is safe to
    /// show on the form.
    Rejected { message: String },
}

impl SignInOutcome {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }
}

/// Checks credentials against the commerce API and issues session tokens.
pub struct SignInHandler {
    api: Arc<dyn CommerceApi>,
    sessions: Arc<dyn SessionTokens>,
}

impl SignInHandler {
    pub fn new(api: Arc<dyn CommerceApi>, sessions: Arc<dyn SessionTokens>) -> Self {
        Self { api, sessions }
    }

    pub async fn handle(&self, credentials: Credentials) -> SignInOutcome {
        match self.api.sign_in(&credentials).await {
            Ok(ActionResult::Success(user)) => match self.sessions.issue(&user).await {
                Ok(token) => SignInOutcome::SignedIn { token, user },
                Err(error) => {
                    tracing::error!("Failed to issue a session token: {}", error);
                    SignInOutcome::Rejected {
                        message: GENERIC_SIGN_IN_ERROR.to_string(),
                    }
                }
            },
            Ok(ActionResult::Failure { message, .. }) => SignInOutcome::Rejected { message },
            Err(error) => {
                tracing::error!("Sign-in request failed: {}", error);
                SignInOutcome::Rejected {
                    message: GENERIC_SIGN_IN_ERROR.to_string(),
                }
            }
        }
    }
}
