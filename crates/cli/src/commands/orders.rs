//! Order commands.

use std::path::Path;

use jollibee_client::{BearerToken, ClientConfig};
use jollibee_core::{OrderId, OrderStatus};
use serde_json::Value;
use tracing::info;

use super::{CommandError, print_json, remote_client};

/// Place an order whose payload is read from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or the backend
/// call fails.
pub async fn create(config: &ClientConfig, file: &Path, token: String) -> Result<(), CommandError> {
    let content = tokio::fs::read_to_string(file).await?;
    let order: Value = serde_json::from_str(&content)?;

    let client = remote_client(config)?;
    let created: Value = client
        .create_order(&order, &BearerToken::new(token))
        .await?;
    print_json(&created)
}

/// Print the logged-in customer's orders.
///
/// # Errors
///
/// Returns an error if the backend call fails.
pub async fn mine(config: &ClientConfig, token: String) -> Result<(), CommandError> {
    let client = remote_client(config)?;
    let orders: Value = client
        .get_customer_orders(&BearerToken::new(token))
        .await?;
    print_json(&orders)
}

/// Print every order.
///
/// # Errors
///
/// Returns an error if the backend call fails.
pub async fn all(config: &ClientConfig, token: String) -> Result<(), CommandError> {
    let client = remote_client(config)?;
    let orders: Value = client.get_all_orders(&BearerToken::new(token)).await?;
    print_json(&orders)
}

/// Change an order's status.
///
/// # Errors
///
/// Returns an error if the backend call fails.
pub async fn update_status(
    config: &ClientConfig,
    id: OrderId,
    status: String,
    token: String,
) -> Result<(), CommandError> {
    let client = remote_client(config)?;
    let status = OrderStatus::new(status);

    info!(order_id = %id, status = %status, "Updating order status");
    let updated: Value = client
        .update_order_status(id, &status, &BearerToken::new(token))
        .await?;
    print_json(&updated)
}
