//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to the outside world:
//! - `auth` - Session token issuing and validation (JWT, mock)
//! - `commerce` - HTTP client for the commerce API (plus mock)
//! - `http` - The server-rendered back-office surface
//! - `presentation` - HTML documents and table rendering

pub mod auth;
pub mod commerce;
pub mod http;
pub mod presentation;
