//! Application layer - use-case handlers over the ports.
//!
//! Listing handlers turn raw pagination input into validated commerce API
//! queries and fold the results into renderable page states; the sign-in
//! handler exchanges credentials for a session token. Handlers hold their
//! ports as `Arc<dyn Trait>` so the HTTP layer can share them freely.

pub mod listing;
pub mod sign_in;

pub use listing::{
    // Per-resource handlers
    AdvertListHandler, CategoryListHandler, ProductListHandler, ReservationListHandler,
    ShopListHandler, UserListHandler,
    // Shared listing pipeline
    load_page, validate_and_fetch,
    // View model
    ListData, ListQuery, ListState,
    // Defaults and messages
    DEFAULT_PAGE, DEFAULT_PER_PAGE, INVALID_PAGINATION,
};
pub use sign_in::{SignInHandler, SignInOutcome};
