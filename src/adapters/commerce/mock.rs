//! Mock commerce API adapter for testing.
//!
//! Implements the `CommerceApi` port over programmable in-memory outcomes,
//! recording every query it receives so tests can assert exactly what
//! reached the remote boundary.
//!
//! # Example
//!
//! ```ignore
//! use shopdesk::adapters::commerce::MockCommerceApi;
//! use shopdesk::domain::paging::Page;
//!
//! let api = MockCommerceApi::new().with_products(Page::empty());
//!
//! let result = api.list_products(&PageQuery::default()).await.unwrap();
//! assert!(result.is_success());
//! assert_eq!(api.product_calls().len(), 1);
//! ```

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::action::ActionResult;
use crate::domain::catalog::{Advert, Category, Product, Reservation, Shop, User};
use crate::domain::paging::{FieldErrors, Page, PageQuery};
use crate::domain::session::{Credentials, SessionUser};
use crate::ports::{ApiError, CommerceApi, ListResult};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Programmed outcome for one listing endpoint.
#[derive(Debug, Clone)]
enum Outcome<T> {
    Success(Page<T>),
    Failure {
        message: String,
        field_errors: Option<FieldErrors>,
    },
    Transport(String),
}

/// Programmed outcome plus recorded queries for one endpoint.
#[derive(Debug)]
struct Endpoint<T> {
    outcome: Mutex<Outcome<T>>,
    calls: Mutex<Vec<PageQuery>>,
}

impl<T: Clone> Endpoint<T> {
    fn new() -> Self {
        Self {
            outcome: Mutex::new(Outcome::Success(Page::empty())),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn set(&self, outcome: Outcome<T>) {
        *self.outcome.lock().unwrap() = outcome;
    }

    fn invoke(&self, query: &PageQuery) -> ListResult<T> {
        self.calls.lock().unwrap().push(query.clone());
        match self.outcome.lock().unwrap().clone() {
            Outcome::Success(page) => Ok(ActionResult::success(page)),
            Outcome::Failure {
                message,
                field_errors,
            } => Ok(match field_errors {
                Some(errors) => ActionResult::rejected(message, errors),
                None => ActionResult::failure(message),
            }),
            Outcome::Transport(message) => Err(ApiError::transport(message)),
        }
    }

    fn calls(&self) -> Vec<PageQuery> {
        self.calls.lock().unwrap().clone()
    }
}

/// How the mock answers sign-in requests.
#[derive(Debug, Clone)]
enum SignInOutcome {
    /// Match credentials against the registered accounts.
    UseAccounts,
    Failure(String),
    Transport(String),
}

/// Mock commerce API with per-endpoint programmable outcomes.
///
/// Every listing endpoint defaults to a successful empty page. Queries are
/// recorded verbatim; `*_calls()` accessors expose them for pass-through
/// and call-count assertions.
#[derive(Debug)]
pub struct MockCommerceApi {
    products: Endpoint<Product>,
    users: Endpoint<User>,
    categories: Endpoint<Category>,
    adverts: Endpoint<Advert>,
    shops: Endpoint<Shop>,
    reservations: Endpoint<Reservation>,
    accounts: Mutex<Vec<(String, String, SessionUser)>>,
    sign_in_outcome: Mutex<SignInOutcome>,
    sign_in_calls: Mutex<Vec<Credentials>>,
}

impl Default for MockCommerceApi {
    fn default() -> Self {
        Self {
            products: Endpoint::new(),
            users: Endpoint::new(),
            categories: Endpoint::new(),
            adverts: Endpoint::new(),
            shops: Endpoint::new(),
            reservations: Endpoint::new(),
            accounts: Mutex::new(Vec::new()),
            sign_in_outcome: Mutex::new(SignInOutcome::UseAccounts),
            sign_in_calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockCommerceApi {
    /// Creates a new mock where every listing succeeds with an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Programs the products endpoint to succeed with the given page.
    pub fn with_products(self, page: Page<Product>) -> Self {
        self.products.set(Outcome::Success(page));
        self
    }

    /// Programs the products endpoint to report a remote failure.
    pub fn with_products_failure(self, message: impl Into<String>) -> Self {
        self.products.set(Outcome::Failure {
            message: message.into(),
            field_errors: None,
        });
        self
    }

    /// Programs the products endpoint to fail at the transport level.
    pub fn with_products_transport_error(self, message: impl Into<String>) -> Self {
        self.products.set(Outcome::Transport(message.into()));
        self
    }

    /// Queries the products endpoint has received, in order.
    pub fn product_calls(&self) -> Vec<PageQuery> {
        self.products.calls()
    }

    /// Programs the users endpoint to succeed with the given page.
    pub fn with_users(self, page: Page<User>) -> Self {
        self.users.set(Outcome::Success(page));
        self
    }

    /// Programs the users endpoint to report a remote failure.
    pub fn with_users_failure(self, message: impl Into<String>) -> Self {
        self.users.set(Outcome::Failure {
            message: message.into(),
            field_errors: None,
        });
        self
    }

    /// Programs the users endpoint to fail at the transport level.
    pub fn with_users_transport_error(self, message: impl Into<String>) -> Self {
        self.users.set(Outcome::Transport(message.into()));
        self
    }

    /// Queries the users endpoint has received, in order.
    pub fn user_calls(&self) -> Vec<PageQuery> {
        self.users.calls()
    }

    /// Programs the categories endpoint to succeed with the given page.
    pub fn with_categories(self, page: Page<Category>) -> Self {
        self.categories.set(Outcome::Success(page));
        self
    }

    pub fn category_calls(&self) -> Vec<PageQuery> {
        self.categories.calls()
    }

    /// Programs the adverts endpoint to succeed with the given page.
    pub fn with_adverts(self, page: Page<Advert>) -> Self {
        self.adverts.set(Outcome::Success(page));
        self
    }

    pub fn advert_calls(&self) -> Vec<PageQuery> {
        self.adverts.calls()
    }

    /// Programs the shops endpoint to succeed with the given page.
    pub fn with_shops(self, page: Page<Shop>) -> Self {
        self.shops.set(Outcome::Success(page));
        self
    }

    pub fn shop_calls(&self) -> Vec<PageQuery> {
        self.shops.calls()
    }

    /// Programs the reservations endpoint to succeed with the given page.
    pub fn with_reservations(self, page: Page<Reservation>) -> Self {
        self.reservations.set(Outcome::Success(page));
        self
    }

    pub fn reservation_calls(&self) -> Vec<PageQuery> {
        self.reservations.calls()
    }

    /// Registers an account that can sign in with the given password.
    pub fn with_account(
        self,
        email: impl Into<String>,
        password: impl Into<String>,
        user: SessionUser,
    ) -> Self {
        self.accounts
            .lock()
            .unwrap()
            .push((email.into(), password.into(), user));
        self
    }

    /// Forces every sign-in to report a remote failure.
    pub fn with_sign_in_failure(self, message: impl Into<String>) -> Self {
        *self.sign_in_outcome.lock().unwrap() = SignInOutcome::Failure(message.into());
        self
    }

    /// Forces every sign-in to fail at the transport level.
    pub fn with_sign_in_transport_error(self, message: impl Into<String>) -> Self {
        *self.sign_in_outcome.lock().unwrap() = SignInOutcome::Transport(message.into());
        self
    }

    /// Number of sign-in attempts observed.
    pub fn sign_in_calls(&self) -> usize {
        self.sign_in_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CommerceApi for MockCommerceApi {
    async fn list_products(&self, query: &PageQuery) -> ListResult<Product> {
        self.products.invoke(query)
    }

    async fn list_users(&self, query: &PageQuery) -> ListResult<User> {
        self.users.invoke(query)
    }

    async fn list_categories(&self, query: &PageQuery) -> ListResult<Category> {
        self.categories.invoke(query)
    }

    async fn list_adverts(&self, query: &PageQuery) -> ListResult<Advert> {
        self.adverts.invoke(query)
    }

    async fn list_shops(&self, query: &PageQuery) -> ListResult<Shop> {
        self.shops.invoke(query)
    }

    async fn list_reservations(&self, query: &PageQuery) -> ListResult<Reservation> {
        self.reservations.invoke(query)
    }

    async fn sign_in(
        &self,
        credentials: &Credentials,
    ) -> Result<ActionResult<SessionUser>, ApiError> {
        self.sign_in_calls.lock().unwrap().push(credentials.clone());

        match self.sign_in_outcome.lock().unwrap().clone() {
            SignInOutcome::UseAccounts => {}
            SignInOutcome::Failure(message) => return Ok(ActionResult::failure(message)),
            SignInOutcome::Transport(message) => return Err(ApiError::transport(message)),
        }

        let accounts = self.accounts.lock().unwrap();
        let matched = accounts
            .iter()
            .find(|(email, password, _)| *email == credentials.email && *password == credentials.password)
            .map(|(_, _, user)| user.clone());

        Ok(match matched {
            Some(user) => ActionResult::success(user),
            None => ActionResult::failure(INVALID_CREDENTIALS),
        })
    }
}
