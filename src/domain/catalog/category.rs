//! Category read model.

use serde::{Deserialize, Serialize};

/// One product category as the commerce API reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub product_count: u32,
}
