//! Session token adapters.
//!
//! Implementations of the `SessionTokens` port:
//!
//! - `jwt` - Production HS256 token codec
//! - `mock` - Test implementation that doesn't require cryptography

mod jwt;
mod mock;

pub use jwt::JwtSessions;
pub use mock::MockSessions;
