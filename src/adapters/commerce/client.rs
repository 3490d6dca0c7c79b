//! HTTP client for the commerce API.
//!
//! This adapter implements the `CommerceApi` port over reqwest. It owns
//! the only timeout in the retrieval path; callers never wrap these calls
//! in their own deadlines.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::domain::action::ActionResult;
use crate::domain::catalog::{Advert, Category, Product, Reservation, Shop, User};
use crate::domain::paging::PageQuery;
use crate::domain::session::{Credentials, SessionUser};
use crate::ports::{ApiError, CommerceApi, ListResult};

use super::wire::{AccountDto, Envelope, PageDto};

/// Production commerce API client.
///
/// One instance is built at startup and shared; `reqwest::Client` pools
/// connections internally.
pub struct HttpCommerceApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCommerceApi {
    /// Create a new client with the configured base URL and timeout.
    pub fn new(config: &ApiConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET one page of a resource, forwarding the query fields verbatim.
    ///
    /// The envelope is decoded regardless of HTTP status; the commerce API
    /// reports its verdict in the body. A body that is not an envelope is
    /// a transport-level fault.
    async fn get_page<T>(&self, path: &str, query: &PageQuery) -> ListResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);

        tracing::debug!(%url, ?query, "requesting page from commerce API");

        let response = self.http.get(&url).query(query).send().await.map_err(|e| {
            tracing::error!("Commerce API request to {} failed: {}", url, e);
            ApiError::transport(e.to_string())
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Commerce API response from {} unreadable: {}", url, e);
            ApiError::transport(e.to_string())
        })?;

        match serde_json::from_slice::<Envelope<PageDto<T>>>(&body) {
            Ok(envelope) => Ok(envelope.into_page_result()),
            Err(_) if !status.is_success() => {
                tracing::error!("Commerce API returned {} for {}", status, url);
                Err(ApiError::transport(format!(
                    "commerce API returned {}",
                    status
                )))
            }
            Err(e) => {
                tracing::error!("Commerce API envelope from {} undecodable: {}", url, e);
                Err(ApiError::decode(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl CommerceApi for HttpCommerceApi {
    async fn list_products(&self, query: &PageQuery) -> ListResult<Product> {
        self.get_page("/products", query).await
    }

    async fn list_users(&self, query: &PageQuery) -> ListResult<User> {
        self.get_page("/users", query).await
    }

    async fn list_categories(&self, query: &PageQuery) -> ListResult<Category> {
        self.get_page("/categories", query).await
    }

    async fn list_adverts(&self, query: &PageQuery) -> ListResult<Advert> {
        self.get_page("/adverts", query).await
    }

    async fn list_shops(&self, query: &PageQuery) -> ListResult<Shop> {
        self.get_page("/shops", query).await
    }

    async fn list_reservations(&self, query: &PageQuery) -> ListResult<Reservation> {
        self.get_page("/reservations", query).await
    }

    async fn sign_in(
        &self,
        credentials: &Credentials,
    ) -> Result<ActionResult<SessionUser>, ApiError> {
        let url = self.endpoint("/auth/sign-in");

        tracing::debug!(email = %credentials.email, "forwarding sign-in to commerce API");

        let response = self
            .http
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Commerce API sign-in request failed: {}", e);
                ApiError::transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Commerce API sign-in response unreadable: {}", e);
            ApiError::transport(e.to_string())
        })?;

        match serde_json::from_slice::<Envelope<AccountDto>>(&body) {
            Ok(envelope) => Ok(envelope.into_sign_in_result()),
            Err(_) if !status.is_success() => Err(ApiError::transport(format!(
                "commerce API returned {}",
                status
            ))),
            Err(e) => Err(ApiError::decode(e.to_string())),
        }
    }
}
