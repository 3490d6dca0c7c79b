//! Inventory reservation read model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of an inventory reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Expired,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Expired => "expired",
            Self::Cancelled => "cancelled",
        }
    }
}

/// One stock reservation as the commerce API reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: Uuid,
    pub product_id: i64,
    pub quantity: u32,
    pub status: ReservationStatus,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_uuid_and_status() {
        let reservation: Reservation = serde_json::from_value(serde_json::json!({
            "id": "7f8a1d44-2c1b-4f3e-9d5a-0b6c8e2f4a10",
            "productId": 41,
            "quantity": 2,
            "status": "pending",
            "expiresAt": "2026-08-22T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(reservation.status, ReservationStatus::Pending);
        assert_eq!(reservation.quantity, 2);
    }

    #[test]
    fn unknown_status_fails_to_deserialize() {
        let result: Result<ReservationStatus, _> =
            serde_json::from_value(serde_json::json!("teleported"));
        assert!(result.is_err());
    }
}
