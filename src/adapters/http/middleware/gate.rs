//! Session gate middleware for the back-office pages.
//!
//! Every page request passes through the gate. Public paths are matched
//! against an exact-string allowlist and skip session checking entirely;
//! everything else needs a session cookie that the `SessionTokens` port
//! accepts. Requests that do not qualify are redirected to the sign-in
//! page with a 307, carrying no return path.
//!
//! ```text
//! Request → access_gate → public path?        → pass through unmodified
//!                       → valid cookie token? → pass through unmodified
//!                       → otherwise           → 307 to the sign-in page
//! ```
//!
//! The gate fails closed: any validation error, expiry included, ends in
//! the same redirect.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::config::SessionConfig;
use crate::ports::SessionTokens;

/// Everything the gate needs, resolved once at startup.
#[derive(Clone)]
pub struct AccessGate {
    public_paths: HashSet<String>,
    sign_in_path: String,
    cookie_name: String,
    sessions: Arc<dyn SessionTokens>,
}

/// Gate middleware state.
pub type GateState = Arc<AccessGate>;

impl AccessGate {
    pub fn new(config: &SessionConfig, sessions: Arc<dyn SessionTokens>) -> Self {
        Self {
            public_paths: config.public_path_set(),
            sign_in_path: config.sign_in_path.clone(),
            cookie_name: config.cookie_name.clone(),
            sessions,
        }
    }

    fn is_public(&self, path: &str) -> bool {
        self.public_paths.contains(path)
    }

    fn redirect_to_sign_in(&self) -> Response {
        Redirect::temporary(&self.sign_in_path).into_response()
    }
}

/// Gate middleware. Wire it with `middleware::from_fn_with_state` and an
/// `Arc<AccessGate>`.
pub async fn access_gate(
    State(gate): State<GateState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    // Exact-string match on the path; query parameters never count.
    if gate.is_public(request.uri().path()) {
        return next.run(request).await;
    }

    let token = match jar.get(&gate.cookie_name) {
        Some(cookie) => cookie.value().to_string(),
        None => return gate.redirect_to_sign_in(),
    };

    match gate.sessions.validate(&token).await {
        Ok(_user) => next.run(request).await,
        Err(error) => {
            tracing::debug!("Session check failed: {}", error);
            gate.redirect_to_sign_in()
        }
    }
}
