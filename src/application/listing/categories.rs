//! Category listing.

use std::sync::Arc;

use crate::domain::catalog::Category;
use crate::domain::paging::{PageRequest, SortDirection};
use crate::ports::{CommerceApi, ListResult};

use super::{load_page, validate_and_fetch, ListQuery, ListState};

const RESOURCE: &str = "categories";
const SORT_BY: &str = "name";
const SORT_DIR: SortDirection = SortDirection::Asc;

/// Loads pages of categories for the category listing page.
pub struct CategoryListHandler {
    api: Arc<dyn CommerceApi>,
}

impl CategoryListHandler {
    pub fn new(api: Arc<dyn CommerceApi>) -> Self {
        Self { api }
    }

    pub async fn fetch(&self, params: Option<PageRequest>) -> ListResult<Category> {
        validate_and_fetch(params, |query| async move {
            self.api.list_categories(&query).await
        })
        .await
    }

    pub async fn handle(&self, query: ListQuery) -> ListState<Category> {
        load_page(RESOURCE, query, SORT_BY, SORT_DIR, |params| {
            self.fetch(params)
        })
        .await
    }
}
