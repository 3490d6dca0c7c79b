//! Session configuration
//!
//! Everything the access gate and the token issuer need is assembled here
//! at startup: the signing secret, the cookie, the sign-in path, and the
//! set of paths reachable without a session. Nothing reads the process
//! environment after load time.

use std::collections::HashSet;

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Session and access-gate configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// HMAC secret the session tokens are signed with
    pub secret: String,

    /// Name of the session cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Session lifetime in hours
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: i64,

    /// Path unauthenticated requests are redirected to
    #[serde(default = "default_sign_in_path")]
    pub sign_in_path: String,

    /// Paths reachable without a session (comma-separated).
    /// When unset, only the sign-in path is public.
    pub public_paths: Option<String>,
}

impl SessionConfig {
    /// The exact-match set of publicly reachable paths.
    ///
    /// Membership is by string equality; no prefix or glob semantics.
    pub fn public_path_set(&self) -> HashSet<String> {
        match &self.public_paths {
            Some(paths) => paths
                .split(',')
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
            None => HashSet::from([self.sign_in_path.clone()]),
        }
    }

    /// Validate session configuration
    ///
    /// In production, requires a signing secret of at least 32 bytes.
    /// Always requires the sign-in path to be publicly reachable, since a
    /// gated sign-in page would redirect to itself forever.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.secret.is_empty() {
            return Err(ValidationError::MissingRequired("SESSION__SECRET"));
        }
        if *environment == Environment::Production && self.secret.len() < 32 {
            return Err(ValidationError::SessionSecretTooShort);
        }
        if self.cookie_name.is_empty() {
            return Err(ValidationError::MissingRequired("SESSION__COOKIE_NAME"));
        }
        if self.ttl_hours < 1 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        if !self.sign_in_path.starts_with('/') {
            return Err(ValidationError::PathMustBeAbsolute);
        }

        let public = self.public_path_set();
        if public.iter().any(|p| !p.starts_with('/')) {
            return Err(ValidationError::PathMustBeAbsolute);
        }
        if !public.contains(&self.sign_in_path) {
            return Err(ValidationError::SignInPathNotPublic);
        }

        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            cookie_name: default_cookie_name(),
            ttl_hours: default_ttl_hours(),
            sign_in_path: default_sign_in_path(),
            public_paths: None,
        }
    }
}

fn default_cookie_name() -> String {
    "shopdesk_session".to_string()
}

fn default_ttl_hours() -> i64 {
    24
}

fn default_sign_in_path() -> String {
    "/sign-in".to_string()
}
