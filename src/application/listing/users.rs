//! Back-office user listing.

use std::sync::Arc;

use crate::domain::catalog::User;
use crate::domain::paging::{PageRequest, SortDirection};
use crate::ports::{CommerceApi, ListResult};

use super::{load_page, validate_and_fetch, ListQuery, ListState};

const RESOURCE: &str = "users";

// The user table is always sorted by id; operators cannot change it.
const SORT_BY: &str = "id";
const SORT_DIR: SortDirection = SortDirection::Asc;

/// Loads pages of users for the user listing page.
pub struct UserListHandler {
    api: Arc<dyn CommerceApi>,
}

impl UserListHandler {
    pub fn new(api: Arc<dyn CommerceApi>) -> Self {
        Self { api }
    }

    /// Validate raw pagination input and fetch one page of users.
    pub async fn fetch(&self, params: Option<PageRequest>) -> ListResult<User> {
        validate_and_fetch(params, |query| async move {
            self.api.list_users(&query).await
        })
        .await
    }

    /// Load the user listing view model for a 1-based page.
    pub async fn handle(&self, query: ListQuery) -> ListState<User> {
        load_page(RESOURCE, query, SORT_BY, SORT_DIR, |params| {
            self.fetch(params)
        })
        .await
    }
}
