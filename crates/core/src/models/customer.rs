//! Customer accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CustomerId, CustomerRole, Email};

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub password: String,
    #[serde(default)]
    pub role: CustomerRole,
    pub created_at: DateTime<Utc>,
}

/// Registration payload for `POST /customers/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub password: String,
}

/// Login payload for `POST /customers/login`.
///
/// Deliberately limited to the two fields the backend expects, so a richer
/// customer record can never leak extra fields into the request.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CustomerCredentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_customer_uses_camel_case() {
        let customer: Customer = serde_json::from_value(json!({
            "id": 1,
            "name": "Demo Customer",
            "email": "customer@jollibee.com",
            "phone": "+1234567890",
            "password": "pass123",
            "role": "customer",
            "createdAt": "2024-01-01T00:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(customer.id, CustomerId::new(1));
        assert_eq!(customer.email.as_str(), "customer@jollibee.com");

        let value = serde_json::to_value(&customer).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_credentials_serialize_exactly_two_fields() {
        let creds = CustomerCredentials {
            email: "customer@jollibee.com",
            password: "pass123",
        };
        assert_eq!(
            serde_json::to_value(creds).unwrap(),
            json!({"email": "customer@jollibee.com", "password": "pass123"})
        );
    }
}
