//! Advert read model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One promotional advert as the commerce API reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advert {
    pub id: i64,
    pub title: String,
    /// Product the advert promotes, absent for shop-wide campaigns.
    pub product_id: Option<i64>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_rfc3339_timestamps() {
        let advert: Advert = serde_json::from_value(serde_json::json!({
            "id": 9,
            "title": "Spring sale",
            "productId": null,
            "startsAt": "2026-03-01T00:00:00Z",
            "endsAt": "2026-03-14T23:59:59Z",
            "active": true
        }))
        .unwrap();

        assert_eq!(advert.product_id, None);
        assert!(advert.starts_at < advert.ends_at);
    }
}
