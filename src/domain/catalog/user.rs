//! User account read model.

use serde::{Deserialize, Serialize};

/// One platform account as the commerce API reports it.
///
/// Not the signed-in operator; that identity lives in
/// [`crate::domain::session::SessionUser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Display name if the account has one.
    pub name: Option<String>,
    pub role: String,
    pub active: bool,
}
