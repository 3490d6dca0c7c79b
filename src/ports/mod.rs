//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CommerceApi` - Remote commerce platform (all persistent state)
//! - `SessionTokens` - Session token issuing and validation

mod commerce_api;
mod session_tokens;

pub use commerce_api::{ApiError, CommerceApi, ListResult};
pub use session_tokens::SessionTokens;
