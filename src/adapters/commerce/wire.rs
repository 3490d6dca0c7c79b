//! Wire shapes of the commerce API.
//!
//! Every endpoint wraps its payload in the same envelope:
//!
//! ```json
//! { "success": true, "data": { ... }, "error": null, "fieldErrors": null }
//! ```
//!
//! The conversions here are the validation boundary: once an envelope has
//! been collapsed into an [`ActionResult`], no optional payloads survive.
//! A successful listing without a payload becomes [`Page::empty`], never a
//! null the rest of the code has to probe.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::action::ActionResult;
use crate::domain::paging::Page;
use crate::domain::session::SessionUser;

const UNSPECIFIED_FAILURE: &str = "The commerce API reported a failure without a message";
const MISSING_ACCOUNT: &str = "The commerce API reported success without an account";

/// Response envelope common to all commerce API endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub field_errors: Option<HashMap<String, Vec<String>>>,
}

/// One page of a resource in the commerce API's wire shape.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDto<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub last: bool,
}

impl<T> PageDto<T> {
    fn into_page(self) -> Page<T> {
        Page {
            content: self.content,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            last: self.last,
        }
    }
}

/// Account payload returned by the sign-in endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl AccountDto {
    fn into_session_user(self) -> SessionUser {
        SessionUser::new(self.id, self.email, self.name)
    }
}

fn failure<T>(error: Option<String>, field_errors: Option<HashMap<String, Vec<String>>>) -> ActionResult<T> {
    let message = error.unwrap_or_else(|| UNSPECIFIED_FAILURE.to_string());
    match field_errors {
        Some(errors) => ActionResult::rejected(message, errors),
        None => ActionResult::failure(message),
    }
}

impl<T> Envelope<PageDto<T>> {
    /// Collapse the envelope into the listing outcome.
    ///
    /// A success without a payload normalizes to the empty page; a failure
    /// carries the remote's message verbatim.
    pub fn into_page_result(self) -> ActionResult<Page<T>> {
        if self.success {
            match self.data {
                Some(dto) => ActionResult::success(dto.into_page()),
                None => ActionResult::success(Page::empty()),
            }
        } else {
            failure(self.error, self.field_errors)
        }
    }
}

impl Envelope<AccountDto> {
    /// Collapse the sign-in envelope into the authentication outcome.
    ///
    /// Unlike listings there is no meaningful empty default here: success
    /// without an account is a protocol breach and surfaces as a failure.
    pub fn into_sign_in_result(self) -> ActionResult<SessionUser> {
        if self.success {
            match self.data {
                Some(account) => ActionResult::success(account.into_session_user()),
                None => ActionResult::failure(MISSING_ACCOUNT),
            }
        } else {
            failure(self.error, self.field_errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Product;

    fn decode_page_envelope(value: serde_json::Value) -> Envelope<PageDto<Product>> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn successful_envelope_converts_to_a_loaded_page() {
        let envelope = decode_page_envelope(serde_json::json!({
            "success": true,
            "data": {
                "content": [{
                    "id": 1,
                    "name": "Espresso Cup",
                    "sku": "CUP-001",
                    "price": 12.5,
                    "stock": 40,
                    "active": true
                }],
                "totalElements": 87,
                "totalPages": 5,
                "last": false
            }
        }));

        let result = envelope.into_page_result();

        match result {
            ActionResult::Success(page) => {
                assert_eq!(page.content.len(), 1);
                assert_eq!(page.content[0].name, "Espresso Cup");
                assert_eq!(page.total_elements, 87);
                assert_eq!(page.total_pages, 5);
                assert!(!page.last);
            }
            ActionResult::Failure { message, .. } => panic!("unexpected failure: {message}"),
        }
    }

    #[test]
    fn success_with_null_data_becomes_the_empty_page() {
        let envelope = decode_page_envelope(serde_json::json!({
            "success": true,
            "data": null
        }));

        let result = envelope.into_page_result();

        assert_eq!(result, ActionResult::success(Page::empty()));
    }

    #[test]
    fn success_with_missing_data_becomes_the_empty_page() {
        let envelope = decode_page_envelope(serde_json::json!({ "success": true }));

        let result = envelope.into_page_result();

        assert_eq!(result, ActionResult::success(Page::empty()));
    }

    #[test]
    fn failure_carries_the_remote_message_verbatim() {
        let envelope = decode_page_envelope(serde_json::json!({
            "success": false,
            "error": "Service unavailable"
        }));

        let result = envelope.into_page_result();

        assert_eq!(result, ActionResult::failure("Service unavailable"));
    }

    #[test]
    fn failure_preserves_field_errors() {
        let envelope = decode_page_envelope(serde_json::json!({
            "success": false,
            "error": "Rejected",
            "fieldErrors": { "pageNo": ["must be a non-negative integer"] }
        }));

        match envelope.into_page_result() {
            ActionResult::Failure { field_errors, .. } => {
                assert!(field_errors.unwrap().contains_key("pageNo"));
            }
            ActionResult::Success(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn failure_without_message_gets_the_fallback_text() {
        let envelope = decode_page_envelope(serde_json::json!({ "success": false }));

        match envelope.into_page_result() {
            ActionResult::Failure { message, .. } => {
                assert_eq!(message, UNSPECIFIED_FAILURE);
            }
            ActionResult::Success(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn sign_in_success_converts_to_a_session_user() {
        let envelope: Envelope<AccountDto> = serde_json::from_value(serde_json::json!({
            "success": true,
            "data": { "id": 7, "email": "ops@example.com", "name": "Alice" }
        }))
        .unwrap();

        let result = envelope.into_sign_in_result();

        assert_eq!(
            result,
            ActionResult::success(SessionUser::new(7, "ops@example.com", Some("Alice".to_string())))
        );
    }

    #[test]
    fn sign_in_success_without_account_is_a_failure() {
        let envelope: Envelope<AccountDto> =
            serde_json::from_value(serde_json::json!({ "success": true })).unwrap();

        match envelope.into_sign_in_result() {
            ActionResult::Failure { message, .. } => assert_eq!(message, MISSING_ACCOUNT),
            ActionResult::Success(_) => panic!("expected failure"),
        }
    }
}
