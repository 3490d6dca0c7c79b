//! Inventory reservation listing.

use std::sync::Arc;

use crate::domain::catalog::Reservation;
use crate::domain::paging::{PageRequest, SortDirection};
use crate::ports::{CommerceApi, ListResult};

use super::{load_page, validate_and_fetch, ListQuery, ListState};

const RESOURCE: &str = "reservations";

// Soonest-expiring reservations first.
const SORT_BY: &str = "expiresAt";
const SORT_DIR: SortDirection = SortDirection::Asc;

/// Loads pages of reservations for the reservation listing page.
pub struct ReservationListHandler {
    api: Arc<dyn CommerceApi>,
}

impl ReservationListHandler {
    pub fn new(api: Arc<dyn CommerceApi>) -> Self {
        Self { api }
    }

    pub async fn fetch(&self, params: Option<PageRequest>) -> ListResult<Reservation> {
        validate_and_fetch(params, |query| async move {
            self.api.list_reservations(&query).await
        })
        .await
    }

    pub async fn handle(&self, query: ListQuery) -> ListState<Reservation> {
        load_page(RESOURCE, query, SORT_BY, SORT_DIR, |params| {
            self.fetch(params)
        })
        .await
    }
}
