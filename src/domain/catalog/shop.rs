//! Shop read model.

use serde::{Deserialize, Serialize};

/// One storefront as the commerce API reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub owner_email: String,
}
