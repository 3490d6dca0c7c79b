//! JWT-backed session tokens.
//!
//! Sessions are self-contained HS256 tokens carrying the operator's
//! identity; no session store exists anywhere. The signing secret comes
//! from [`SessionConfig`] and is held behind `secrecy` so it never lands
//! in debug output.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;
use crate::domain::session::{AuthError, SessionUser};
use crate::ports::SessionTokens;

/// Claims embedded in a session token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Account id in the commerce platform.
    sub: i64,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    iat: i64,
    exp: i64,
}

/// Issues and validates HS256 session tokens.
pub struct JwtSessions {
    secret: SecretString,
    ttl: Duration,
}

impl JwtSessions {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            secret: SecretString::new(config.secret.clone()),
            ttl: Duration::hours(config.ttl_hours),
        }
    }

    fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(self.secret.expose_secret().as_bytes())
    }

    fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.secret.expose_secret().as_bytes())
    }
}

#[async_trait]
impl SessionTokens for JwtSessions {
    async fn issue(&self, user: &SessionUser) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key())
            .map_err(|error| AuthError::issuance(error.to_string()))
    }

    async fn validate(&self, token: &str) -> Result<SessionUser, AuthError> {
        let data = decode::<Claims>(
            token,
            &self.decoding_key(),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|error| match error.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })?;

        Ok(SessionUser::new(
            data.claims.sub,
            data.claims.email,
            data.claims.name,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn sessions() -> JwtSessions {
        JwtSessions::new(&SessionConfig {
            secret: TEST_SECRET.to_string(),
            ..Default::default()
        })
    }

    fn operator() -> SessionUser {
        SessionUser::new(7, "ops@example.com", Some("Alice".to_string()))
    }

    #[tokio::test]
    async fn issued_token_round_trips() {
        let sessions = sessions();

        let token = sessions.issue(&operator()).await.unwrap();
        let user = sessions.validate(&token).await.unwrap();

        assert_eq!(user, operator());
    }

    #[tokio::test]
    async fn tampered_token_is_invalid() {
        let sessions = sessions();

        let token = sessions.issue(&operator()).await.unwrap();
        let tampered = format!("{}x", token);

        let result = sessions.validate(&tampered).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn garbage_token_is_invalid() {
        let sessions = sessions();

        let result = sessions.validate("not-a-jwt").await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn token_signed_with_other_secret_is_invalid() {
        let sessions = sessions();
        let other = JwtSessions::new(&SessionConfig {
            secret: "ffffffffffffffffffffffffffffffff".to_string(),
            ..Default::default()
        });

        let token = other.issue(&operator()).await.unwrap();

        let result = sessions.validate(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn expired_token_is_reported_as_expired() {
        let sessions = sessions();

        // Two hours in the past, well beyond the default leeway.
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: 7,
            email: "ops@example.com".to_string(),
            name: None,
            iat: now - 10_000,
            exp: now - 7_200,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        let result = sessions.validate(&token).await;
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }
}
