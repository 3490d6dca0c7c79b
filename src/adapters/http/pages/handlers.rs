//! Handlers for the server-rendered back-office pages.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use crate::adapters::presentation::{index_document, listing_document, sign_in_document};
use crate::application::listing::{ListQuery, DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::application::{
    AdvertListHandler, CategoryListHandler, ProductListHandler, ReservationListHandler,
    ShopListHandler, SignInHandler, SignInOutcome, UserListHandler,
};
use crate::config::SessionConfig;
use crate::domain::session::Credentials;
use crate::ports::{CommerceApi, SessionTokens};

/// Application state shared by the page handlers.
///
/// Cloned per request; the ports are Arc-wrapped so handlers are created
/// on demand.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn CommerceApi>,
    pub sessions: Arc<dyn SessionTokens>,
    pub session_config: SessionConfig,
}

impl AppState {
    pub fn new(
        api: Arc<dyn CommerceApi>,
        sessions: Arc<dyn SessionTokens>,
        session_config: SessionConfig,
    ) -> Self {
        Self {
            api,
            sessions,
            session_config,
        }
    }

    pub fn product_list_handler(&self) -> ProductListHandler {
        ProductListHandler::new(self.api.clone())
    }

    pub fn user_list_handler(&self) -> UserListHandler {
        UserListHandler::new(self.api.clone())
    }

    pub fn category_list_handler(&self) -> CategoryListHandler {
        CategoryListHandler::new(self.api.clone())
    }

    pub fn advert_list_handler(&self) -> AdvertListHandler {
        AdvertListHandler::new(self.api.clone())
    }

    pub fn shop_list_handler(&self) -> ShopListHandler {
        ShopListHandler::new(self.api.clone())
    }

    pub fn reservation_list_handler(&self) -> ReservationListHandler {
        ReservationListHandler::new(self.api.clone())
    }

    pub fn sign_in_handler(&self) -> SignInHandler {
        SignInHandler::new(self.api.clone(), self.sessions.clone())
    }
}

/// Raw `?page=&per_page=` input from the query string.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    page: Option<u32>,
    per_page: Option<u32>,
}

impl PageParams {
    /// Absent or zero parameters fall back to the defaults, so the
    /// listing handlers always see positive numbers.
    fn list_query(&self) -> ListQuery {
        ListQuery {
            page: self.page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE),
            per_page: self.per_page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PER_PAGE),
        }
    }
}

pub async fn index_page() -> Html<String> {
    Html(index_document())
}

pub async fn products_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Html<String> {
    let page = state
        .product_list_handler()
        .handle(params.list_query())
        .await;
    Html(listing_document("Products", "/products", &page))
}

pub async fn users_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Html<String> {
    let page = state.user_list_handler().handle(params.list_query()).await;
    Html(listing_document("Users", "/users", &page))
}

pub async fn categories_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Html<String> {
    let page = state
        .category_list_handler()
        .handle(params.list_query())
        .await;
    Html(listing_document("Categories", "/categories", &page))
}

pub async fn adverts_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Html<String> {
    let page = state
        .advert_list_handler()
        .handle(params.list_query())
        .await;
    Html(listing_document("Adverts", "/adverts", &page))
}

pub async fn shops_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Html<String> {
    let page = state.shop_list_handler().handle(params.list_query()).await;
    Html(listing_document("Shops", "/shops", &page))
}

pub async fn reservations_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Html<String> {
    let page = state
        .reservation_list_handler()
        .handle(params.list_query())
        .await;
    Html(listing_document("Reservations", "/reservations", &page))
}

/// Form fields posted by the sign-in page.
#[derive(Debug, Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

pub async fn sign_in_form(State(state): State<AppState>) -> Html<String> {
    Html(sign_in_document(&state.session_config.sign_in_path, None))
}

pub async fn sign_in_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SignInForm>,
) -> Response {
    let outcome = state
        .sign_in_handler()
        .handle(Credentials {
            email: form.email,
            password: form.password,
        })
        .await;

    match outcome {
        SignInOutcome::SignedIn { token, user } => {
            tracing::info!("Operator {} signed in", user.email);
            let cookie = Cookie::build((state.session_config.cookie_name.clone(), token))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .build();
            (jar.add(cookie), Redirect::to("/")).into_response()
        }
        SignInOutcome::Rejected { message } => Html(sign_in_document(
            &state.session_config.sign_in_path,
            Some(&message),
        ))
        .into_response(),
    }
}

pub async fn sign_out(State(state): State<AppState>, jar: CookieJar) -> Response {
    let cookie = Cookie::build((state.session_config.cookie_name.clone(), ""))
        .path("/")
        .build();
    (
        jar.remove(cookie),
        Redirect::to(&state.session_config.sign_in_path),
    )
        .into_response()
}
