//! Orders.
//!
//! The order payload is defined by the caller and interpreted by the server,
//! so the client keeps it as an open JSON object. Only the server-assigned
//! `id` and `status` are lifted into typed fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{OrderId, OrderStatus};

/// An order as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// Every other field, verbatim.
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// Payload for `PATCH /orders/{id}/status`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusUpdate<'a> {
    pub status: &'a OrderStatus,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_order_keeps_unknown_fields() {
        let body = json!({
            "id": 17,
            "status": "pending",
            "items": [{"menuItemId": 1, "quantity": 2}],
            "total": 164
        });

        let order: Order = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(order.id, Some(OrderId::new(17)));
        assert_eq!(order.status, Some(OrderStatus::new("pending")));
        assert_eq!(order.details.get("total"), Some(&json!(164)));

        assert_eq!(serde_json::to_value(&order).unwrap(), body);
    }

    #[test]
    fn test_order_without_server_fields() {
        let order: Order = serde_json::from_value(json!({"items": []})).unwrap();
        assert!(order.id.is_none());
        assert!(order.status.is_none());
    }
}
