//! Axum router for the back-office pages.
//!
//! Page routes sit behind the session gate; `/health` stays outside it
//! so probes never need a session.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;

use crate::adapters::http::middleware::{access_gate, AccessGate};

use super::handlers::{
    adverts_page, categories_page, index_page, products_page, reservations_page, shops_page,
    sign_in_form, sign_in_submit, sign_out, users_page, AppState,
};

/// The gated page routes. The sign-in path comes from configuration; the
/// gate's allowlist must cover it.
pub fn pages_routes(sign_in_path: &str) -> Router<AppState> {
    Router::new()
        .route("/", get(index_page))
        .route("/products", get(products_page))
        .route("/users", get(users_page))
        .route("/categories", get(categories_page))
        .route("/adverts", get(adverts_page))
        .route("/shops", get(shops_page))
        .route("/reservations", get(reservations_page))
        .route(sign_in_path, get(sign_in_form).post(sign_in_submit))
        .route("/sign-out", post(sign_out))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Assembles the whole application router: gate, pages, health probe and
/// request tracing.
pub fn app_router(state: AppState) -> Router {
    let gate = Arc::new(AccessGate::new(
        &state.session_config,
        state.sessions.clone(),
    ));

    let pages = pages_routes(&state.session_config.sign_in_path)
        .layer(middleware::from_fn_with_state(gate, access_gate))
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .merge(pages)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::auth::MockSessions;
    use crate::adapters::commerce::MockCommerceApi;
    use crate::config::SessionConfig;
    use crate::domain::session::SessionUser;

    fn test_state(api: MockCommerceApi, sessions: MockSessions) -> AppState {
        let config = SessionConfig {
            secret: "test-secret".to_string(),
            ..SessionConfig::default()
        };
        AppState::new(Arc::new(api), Arc::new(sessions), config)
    }

    fn get_request(path: &str) -> Request<Body> {
        Request::builder().uri(path).body(Body::empty()).unwrap()
    }

    fn get_with_session(path: &str) -> Request<Body> {
        Request::builder()
            .uri(path)
            .header(header::COOKIE, "shopdesk_session=good-token")
            .body(Body::empty())
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8_lossy(&bytes).to_string()
    }

    #[tokio::test]
    async fn health_needs_no_session() {
        let router = app_router(test_state(MockCommerceApi::new(), MockSessions::new()));

        let response = router.oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("ok"));
    }

    #[tokio::test]
    async fn anonymous_page_requests_redirect_to_sign_in() {
        let router = app_router(test_state(MockCommerceApi::new(), MockSessions::new()));

        let response = router.oneshot(get_request("/products")).await.unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/sign-in"
        );
    }

    #[tokio::test]
    async fn sign_in_page_is_public() {
        let router = app_router(test_state(MockCommerceApi::new(), MockSessions::new()));

        let response = router.oneshot(get_request("/sign-in")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("name=\"password\""));
    }

    #[tokio::test]
    async fn a_session_cookie_unlocks_the_pages() {
        let sessions = MockSessions::new().with_test_session("good-token", 1);
        let router = app_router(test_state(MockCommerceApi::new(), sessions));

        let response = router.oneshot(get_with_session("/products")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("<h1>Products</h1>"));
    }

    #[tokio::test]
    async fn successful_sign_in_sets_the_cookie_and_redirects_home() {
        let api = MockCommerceApi::new().with_account(
            "rosa@example.com",
            "hunter2",
            SessionUser::new(7, "rosa@example.com", None),
        );
        let router = app_router(test_state(api, MockSessions::new()));

        let request = Request::builder()
            .method("POST")
            .uri("/sign-in")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("email=rosa%40example.com&password=hunter2"))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(cookie.starts_with("shopdesk_session="));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
    }

    #[tokio::test]
    async fn rejected_sign_in_rerenders_the_form() {
        let router = app_router(test_state(MockCommerceApi::new(), MockSessions::new()));

        let request = Request::builder()
            .method("POST")
            .uri("/sign-in")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("email=who%40example.com&password=nope"))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Invalid email or password"));
        assert!(body.contains("<form"));
    }

    #[tokio::test]
    async fn sign_out_expires_the_cookie() {
        let sessions = MockSessions::new().with_test_session("good-token", 1);
        let router = app_router(test_state(MockCommerceApi::new(), sessions));

        let request = Request::builder()
            .method("POST")
            .uri("/sign-out")
            .header(header::COOKIE, "shopdesk_session=good-token")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/sign-in"
        );
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(cookie.starts_with("shopdesk_session="));
        assert!(cookie.contains("Max-Age=0"));
    }
}
