//! Paginated listing handlers for the back-office resource pages.
//!
//! Every resource page goes through the same two-step pipeline:
//!
//! 1. [`validate_and_fetch`] checks raw pagination input at the boundary
//!    and only talks to the commerce API when the input is well-formed.
//! 2. [`load_page`] wraps that pipeline for page rendering: it fixes the
//!    sort order, converts the operator-facing 1-based page number into
//!    the API's 0-based `pageNo`, and collapses every failure into a
//!    message the page can show.
//!
//! Handlers never panic and never surface transport errors to operators.

mod adverts;
mod categories;
mod products;
mod reservations;
mod shops;
mod users;

pub use adverts::AdvertListHandler;
pub use categories::CategoryListHandler;
pub use products::ProductListHandler;
pub use reservations::ReservationListHandler;
pub use shops::ShopListHandler;
pub use users::UserListHandler;

use std::future::Future;

use crate::domain::action::ActionResult;
use crate::domain::paging::{PageQuery, PageRequest, SortDirection};
use crate::ports::ListResult;

/// Failure message returned when raw pagination input does not validate.
pub const INVALID_PAGINATION: &str = "Invalid pagination parameters";

/// Default page shown when the request does not name one.
pub const DEFAULT_PAGE: u32 = 1;

/// Default number of rows per page.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Operator-facing listing request: a 1-based page and a page size.
///
/// The HTTP layer builds this from query parameters, falling back to the
/// defaults when a parameter is absent or not a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: u32,
    /// Rows per page.
    pub per_page: u32,
}

impl ListQuery {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// What a listing page renders: either a page of rows or an error banner.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    /// The page loaded; render the table.
    Loaded(ListData<T>),
    /// The page could not be loaded; render the message instead.
    Failed { message: String },
}

impl<T> ListState<T> {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// One loaded page of rows plus the pagination facts the view needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ListData<T> {
    pub content: Vec<T>,
    /// The 1-based page that was requested.
    pub page: u32,
    pub per_page: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    /// Whether this is the final page.
    pub last: bool,
}

/// Validate raw pagination input, then fetch through `fetch` only if it
/// passed.
///
/// `None` means "no constraints": the fetch runs with an empty query and
/// the remote applies its own defaults. `Some` input is validated
/// field-by-field; any invalid present field short-circuits into an
/// [`ActionResult::Failure`] carrying [`INVALID_PAGINATION`] and the
/// per-field errors, and `fetch` is never invoked. Valid input is
/// forwarded with exactly the fields that were provided.
///
/// The outer `Result` is only an `Err` when `fetch` itself reports a
/// transport fault; validation failures are ordinary `Ok` values.
pub async fn validate_and_fetch<T, F, Fut>(params: Option<PageRequest>, fetch: F) -> ListResult<T>
where
    F: FnOnce(PageQuery) -> Fut,
    Fut: Future<Output = ListResult<T>>,
{
    let query = match params {
        None => PageQuery::default(),
        Some(request) => match request.validate() {
            Ok(query) => query,
            Err(field_errors) => {
                return Ok(ActionResult::rejected(INVALID_PAGINATION, field_errors));
            }
        },
    };

    fetch(query).await
}

/// Load one page of a resource for rendering.
///
/// Builds the full pagination request from the operator's 1-based page
/// (the remote counts pages from zero) and the resource's fixed sort,
/// runs it through `fetch`, and folds the outcome into a [`ListState`]:
///
/// * remote success is rendered as-is, including empty pages;
/// * a remote failure keeps its message, prefixed with the resource name;
/// * a transport fault is logged and replaced with a retry prompt, so
///   the page itself never errors.
pub async fn load_page<T, F, Fut>(
    resource: &str,
    query: ListQuery,
    sort_by: &str,
    sort_dir: SortDirection,
    fetch: F,
) -> ListState<T>
where
    F: FnOnce(Option<PageRequest>) -> Fut,
    Fut: Future<Output = ListResult<T>>,
{
    let request = PageRequest {
        page_no: Some(i64::from(query.page.saturating_sub(1))),
        page_size: Some(i64::from(query.per_page)),
        sort_by: Some(sort_by.to_string()),
        sort_dir: Some(sort_dir.as_str().to_string()),
    };

    match fetch(Some(request)).await {
        Ok(ActionResult::Success(data)) => ListState::Loaded(ListData {
            content: data.content,
            page: query.page,
            per_page: query.per_page,
            total_elements: data.total_elements,
            total_pages: data.total_pages,
            last: data.last,
        }),
        Ok(ActionResult::Failure { message, .. }) => ListState::Failed {
            message: format!("Error loading {}: {}", resource, message),
        },
        Err(error) => {
            tracing::error!("Failed to load {}: {}", resource, error);
            ListState::Failed {
                message: format!("Error loading {}. Please try again.", resource),
            }
        }
    }
}
