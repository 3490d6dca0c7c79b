//! Server-rendered page endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::{AppState, PageParams};
pub use routes::{app_router, pages_routes};
