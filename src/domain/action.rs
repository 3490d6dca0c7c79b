//! Uniform outcome envelope for operations that cross the commerce API
//! boundary.

use serde::{Deserialize, Serialize};

use crate::domain::paging::FieldErrors;

/// Outcome of a remote-backed action: exactly one of success-with-data or
/// failure-with-message.
///
/// Failures are ordinary values, never panics or transport errors. Callers
/// match on the variant; there is no optional payload to probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum ActionResult<T> {
    Success(T),
    Failure {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        field_errors: Option<FieldErrors>,
    },
}

impl<T> ActionResult<T> {
    pub fn success(data: T) -> Self {
        Self::Success(data)
    }

    /// Failure without per-field detail, e.g. a remote-reported error.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
            field_errors: None,
        }
    }

    /// Failure carrying per-field diagnostics, e.g. rejected input.
    pub fn rejected(message: impl Into<String>, field_errors: FieldErrors) -> Self {
        Self::Failure {
            message: message.into(),
            field_errors: Some(field_errors),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }
}
