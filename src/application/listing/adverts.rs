//! Advert listing.

use std::sync::Arc;

use crate::domain::catalog::Advert;
use crate::domain::paging::{PageRequest, SortDirection};
use crate::ports::{CommerceApi, ListResult};

use super::{load_page, validate_and_fetch, ListQuery, ListState};

const RESOURCE: &str = "adverts";

// Newest adverts first.
const SORT_BY: &str = "id";
const SORT_DIR: SortDirection = SortDirection::Desc;

/// Loads pages of adverts for the advert listing page.
pub struct AdvertListHandler {
    api: Arc<dyn CommerceApi>,
}

impl AdvertListHandler {
    pub fn new(api: Arc<dyn CommerceApi>) -> Self {
        Self { api }
    }

    pub async fn fetch(&self, params: Option<PageRequest>) -> ListResult<Advert> {
        validate_and_fetch(params, |query| async move {
            self.api.list_adverts(&query).await
        })
        .await
    }

    pub async fn handle(&self, query: ListQuery) -> ListState<Advert> {
        load_page(RESOURCE, query, SORT_BY, SORT_DIR, |params| {
            self.fetch(params)
        })
        .await
    }
}
