//! Product read model.

use serde::{Deserialize, Serialize};

/// One product as the commerce API reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub sku: String,
    /// Unit price in the shop's display currency.
    pub price: f64,
    pub stock: u32,
    pub active: bool,
}
