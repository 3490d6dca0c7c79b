//! HTTP adapters - the server-rendered back-office surface.

pub mod middleware;
pub mod pages;

// Re-export key types for convenience
pub use middleware::{access_gate, AccessGate, GateState};
pub use pages::{app_router, pages_routes, AppState};
