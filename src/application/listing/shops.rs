//! Shop listing.

use std::sync::Arc;

use crate::domain::catalog::Shop;
use crate::domain::paging::{PageRequest, SortDirection};
use crate::ports::{CommerceApi, ListResult};

use super::{load_page, validate_and_fetch, ListQuery, ListState};

const RESOURCE: &str = "shops";
const SORT_BY: &str = "name";
const SORT_DIR: SortDirection = SortDirection::Asc;

/// Loads pages of shops for the shop listing page.
pub struct ShopListHandler {
    api: Arc<dyn CommerceApi>,
}

impl ShopListHandler {
    pub fn new(api: Arc<dyn CommerceApi>) -> Self {
        Self { api }
    }

    pub async fn fetch(&self, params: Option<PageRequest>) -> ListResult<Shop> {
        validate_and_fetch(params, |query| async move {
            self.api.list_shops(&query).await
        })
        .await
    }

    pub async fn handle(&self, query: ListQuery) -> ListState<Shop> {
        load_page(RESOURCE, query, SORT_BY, SORT_DIR, |params| {
            self.fetch(params)
        })
        .await
    }
}
