//! HTTP middleware for axum.
//!
//! - `gate` - Session gate guarding the back-office pages

pub mod gate;

pub use gate::{access_gate, AccessGate, GateState};
