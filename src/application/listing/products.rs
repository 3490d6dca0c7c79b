//! Product listing.

use std::sync::Arc;

use crate::domain::catalog::Product;
use crate::domain::paging::{PageRequest, SortDirection};
use crate::ports::{CommerceApi, ListResult};

use super::{load_page, validate_and_fetch, ListQuery, ListState};

const RESOURCE: &str = "products";

// The product table is always sorted by name; operators cannot change it.
const SORT_BY: &str = "name";
const SORT_DIR: SortDirection = SortDirection::Asc;

/// Loads pages of products for the product listing page.
pub struct ProductListHandler {
    api: Arc<dyn CommerceApi>,
}

impl ProductListHandler {
    pub fn new(api: Arc<dyn CommerceApi>) -> Self {
        Self { api }
    }

    /// Validate raw pagination input and fetch one page of products.
    ///
    /// Invalid input short-circuits into a failure without touching the
    /// commerce API; valid input is forwarded with exactly the fields
    /// that were provided.
    pub async fn fetch(&self, params: Option<PageRequest>) -> ListResult<Product> {
        validate_and_fetch(params, |query| async move {
            self.api.list_products(&query).await
        })
        .await
    }

    /// Load the product listing view model for a 1-based page.
    pub async fn handle(&self, query: ListQuery) -> ListState<Product> {
        load_page(RESOURCE, query, SORT_BY, SORT_DIR, |params| {
            self.fetch(params)
        })
        .await
    }
}
