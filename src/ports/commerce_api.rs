//! Commerce API port: the single gateway to the platform's remote service.
//!
//! All persistent state lives behind this port. Listing operations return
//! an [`ActionResult`] so that remote-reported failures stay ordinary
//! values; only transport-level faults (network, timeout, unreadable
//! response) surface as [`ApiError`].

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::action::ActionResult;
use crate::domain::catalog::{Advert, Category, Product, Reservation, Shop, User};
use crate::domain::paging::{Page, PageQuery};
use crate::domain::session::{Credentials, SessionUser};

/// Transport-level fault while talking to the commerce API.
///
/// These are the "thrown" errors: callers at the view boundary catch them,
/// log them, and render a generic message. Remote-reported failures are
/// NOT errors; they arrive as `ActionResult::Failure`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response (connect, timeout, TLS).
    #[error("commerce API request failed: {0}")]
    Transport(String),

    /// A response arrived but its body was not the expected shape.
    #[error("commerce API response could not be read: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

/// Outcome of a listing call: remote verdict inside, transport fault outside.
pub type ListResult<T> = Result<ActionResult<Page<T>>, ApiError>;

/// Client for the commerce platform's HTTP API.
///
/// # Contract
///
/// Implementations must:
/// - Forward exactly the query fields they are given; absent fields stay
///   absent on the wire
/// - Normalize a successful-but-empty payload to `Page::empty()` so callers
///   never see a missing page
/// - Map remote-reported failures to `ActionResult::Failure` with the
///   remote's message verbatim
/// - Reserve `Err(ApiError)` for faults where no remote verdict exists
#[async_trait]
pub trait CommerceApi: Send + Sync {
    async fn list_products(&self, query: &PageQuery) -> ListResult<Product>;

    async fn list_users(&self, query: &PageQuery) -> ListResult<User>;

    async fn list_categories(&self, query: &PageQuery) -> ListResult<Category>;

    async fn list_adverts(&self, query: &PageQuery) -> ListResult<Advert>;

    async fn list_shops(&self, query: &PageQuery) -> ListResult<Shop>;

    async fn list_reservations(&self, query: &PageQuery) -> ListResult<Reservation>;

    /// Verify credentials and return the account behind them.
    async fn sign_in(&self, credentials: &Credentials)
        -> Result<ActionResult<SessionUser>, ApiError>;
}
