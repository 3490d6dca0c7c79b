//! Commerce API adapters.
//!
//! Implementations of the `CommerceApi` port:
//!
//! - `client` - Production reqwest client speaking the envelope protocol
//! - `mock` - Programmable test implementation with call capture
//! - `wire` - Envelope and payload DTOs shared by the client

mod client;
mod mock;
mod wire;

pub use client::HttpCommerceApi;
pub use mock::MockCommerceApi;
