//! Pagination primitives shared by every listing surface.
//!
//! Raw, possibly-partial pagination input ([`PageRequest`]) is validated
//! into a typed [`PageQuery`] before anything reaches the commerce API.
//! Results come back as a [`Page`] snapshot of one slice of a resource.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-field validation diagnostics, keyed by the wire field name
/// (`pageNo`, `pageSize`, `sortBy`, `sortDir`).
pub type FieldErrors = HashMap<String, Vec<String>>;

/// Sort order accepted by the commerce API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses the literal wire values `"asc"` and `"desc"`. Case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw pagination input as it arrives from a caller.
///
/// Every field is optional; absent fields are not an error. Present fields
/// carry whatever the caller sent and gain meaning only through
/// [`PageRequest::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page_no: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
}

impl PageRequest {
    /// Validates the fields that are present and produces a typed query.
    ///
    /// Rules: `page_no` must be a non-negative integer, `page_size` a
    /// positive integer, `sort_by` a non-empty string, and `sort_dir`
    /// exactly `"asc"` or `"desc"`. All present fields are checked so the
    /// caller receives every diagnostic at once, not just the first.
    pub fn validate(&self) -> Result<PageQuery, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut query = PageQuery::default();

        if let Some(page_no) = self.page_no {
            match u64::try_from(page_no) {
                Ok(value) => query.page_no = Some(value),
                Err(_) => add_error(&mut errors, "pageNo", "must be a non-negative integer"),
            }
        }

        if let Some(page_size) = self.page_size {
            match u64::try_from(page_size) {
                Ok(value) if value >= 1 => query.page_size = Some(value),
                _ => add_error(&mut errors, "pageSize", "must be a positive integer"),
            }
        }

        if let Some(sort_by) = &self.sort_by {
            if sort_by.trim().is_empty() {
                add_error(&mut errors, "sortBy", "must be a non-empty string");
            } else {
                query.sort_by = Some(sort_by.clone());
            }
        }

        if let Some(sort_dir) = &self.sort_dir {
            match SortDirection::parse(sort_dir) {
                Some(direction) => query.sort_dir = Some(direction),
                None => add_error(&mut errors, "sortDir", "must be either \"asc\" or \"desc\""),
            }
        }

        if errors.is_empty() {
            Ok(query)
        } else {
            Err(errors)
        }
    }
}

fn add_error(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

/// Validated pagination query forwarded to the commerce API.
///
/// Fields stay optional: this layer never fills in values the caller did
/// not provide. Serializes with the API's camelCase parameter names,
/// omitting absent fields entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_no: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<SortDirection>,
}

/// One page of a resource as reported by the commerce API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub last: bool,
}

impl<T> Page<T> {
    /// The canonical empty page: no content, zero totals, nothing after it.
    ///
    /// Every "successful but payload-free" response normalizes to this
    /// value, so downstream code never handles a null payload.
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            last: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn messages_for<'a>(errors: &'a FieldErrors, field: &str) -> &'a [String] {
        errors
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or_else(|| panic!("expected diagnostics for {field}"))
    }

    #[test]
    fn empty_request_validates_to_empty_query() {
        let query = PageRequest::default().validate().unwrap();
        assert_eq!(query, PageQuery::default());
    }

    #[test]
    fn full_request_validates_to_typed_query() {
        let request = PageRequest {
            page_no: Some(2),
            page_size: Some(25),
            sort_by: Some("name".to_string()),
            sort_dir: Some("desc".to_string()),
        };

        let query = request.validate().unwrap();

        assert_eq!(query.page_no, Some(2));
        assert_eq!(query.page_size, Some(25));
        assert_eq!(query.sort_by.as_deref(), Some("name"));
        assert_eq!(query.sort_dir, Some(SortDirection::Desc));
    }

    #[test]
    fn partial_request_leaves_absent_fields_absent() {
        let request = PageRequest {
            page_size: Some(10),
            ..PageRequest::default()
        };

        let query = request.validate().unwrap();

        assert_eq!(query.page_no, None);
        assert_eq!(query.page_size, Some(10));
        assert_eq!(query.sort_by, None);
        assert_eq!(query.sort_dir, None);
    }

    #[test]
    fn negative_page_number_is_rejected() {
        let request = PageRequest {
            page_no: Some(-1),
            ..PageRequest::default()
        };

        let errors = request.validate().unwrap_err();

        assert_eq!(
            messages_for(&errors, "pageNo"),
            ["must be a non-negative integer"]
        );
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let request = PageRequest {
            page_size: Some(0),
            ..PageRequest::default()
        };

        let errors = request.validate().unwrap_err();

        assert_eq!(
            messages_for(&errors, "pageSize"),
            ["must be a positive integer"]
        );
    }

    #[test]
    fn blank_sort_field_is_rejected() {
        let request = PageRequest {
            sort_by: Some("   ".to_string()),
            ..PageRequest::default()
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.contains_key("sortBy"));
    }

    #[test]
    fn sort_direction_is_case_sensitive() {
        let request = PageRequest {
            sort_dir: Some("ASC".to_string()),
            ..PageRequest::default()
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.contains_key("sortDir"));
    }

    #[test]
    fn invalid_fields_accumulate_instead_of_short_circuiting() {
        let request = PageRequest {
            page_no: Some(-3),
            page_size: Some(0),
            sort_by: Some(String::new()),
            sort_dir: Some("sideways".to_string()),
        };

        let errors = request.validate().unwrap_err();

        assert_eq!(errors.len(), 4);
        assert!(errors.contains_key("pageNo"));
        assert!(errors.contains_key("pageSize"));
        assert!(errors.contains_key("sortBy"));
        assert!(errors.contains_key("sortDir"));
    }

    #[test]
    fn query_serializes_with_wire_names_and_omits_absent_fields() {
        let query = PageQuery {
            page_no: Some(0),
            page_size: Some(20),
            sort_by: None,
            sort_dir: Some(SortDirection::Asc),
        };

        let value = serde_json::to_value(&query).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "pageNo": 0, "pageSize": 20, "sortDir": "asc" })
        );
    }

    #[test]
    fn empty_page_has_no_content_and_is_last() {
        let page: Page<String> = Page::empty();

        assert!(page.is_empty());
        assert_eq!(page.total_elements, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.last);
    }

    #[test]
    fn sort_direction_round_trips_through_parse() {
        assert_eq!(SortDirection::parse("asc"), Some(SortDirection::Asc));
        assert_eq!(SortDirection::parse("desc"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::parse("descending"), None);
        assert_eq!(SortDirection::Asc.to_string(), "asc");
    }

    proptest! {
        #[test]
        fn any_non_negative_page_number_is_preserved(n in 0i64..i64::MAX) {
            let request = PageRequest { page_no: Some(n), ..PageRequest::default() };
            let query = request.validate().unwrap();
            prop_assert_eq!(query.page_no, Some(n as u64));
        }

        #[test]
        fn any_negative_page_number_is_rejected(n in i64::MIN..0i64) {
            let request = PageRequest { page_no: Some(n), ..PageRequest::default() };
            let errors = request.validate().unwrap_err();
            prop_assert!(errors.contains_key("pageNo"));
        }

        #[test]
        fn any_positive_page_size_is_preserved(n in 1i64..i64::MAX) {
            let request = PageRequest { page_size: Some(n), ..PageRequest::default() };
            let query = request.validate().unwrap();
            prop_assert_eq!(query.page_size, Some(n as u64));
        }

        #[test]
        fn sort_direction_rejects_everything_but_the_two_literals(s in "[a-zA-Z]{0,8}") {
            prop_assume!(s != "asc" && s != "desc");
            let request = PageRequest { sort_dir: Some(s), ..PageRequest::default() };
            let errors = request.validate().unwrap_err();
            prop_assert!(errors.contains_key("sortDir"));
        }
    }
}
