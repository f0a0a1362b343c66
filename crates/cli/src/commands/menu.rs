//! Menu commands.

use jollibee_client::{BearerToken, ClientConfig};
use jollibee_core::{NewMenuItem, Price};
use serde_json::Value;

use super::{CommandError, print_json, remote_client};

/// Fetch and print the menu.
///
/// # Errors
///
/// Returns an error if the backend call fails.
pub async fn list(config: &ClientConfig) -> Result<(), CommandError> {
    let client = remote_client(config)?;
    let items: Value = client.get_menu_items().await?;
    print_json(&items)
}

/// Add a menu item.
///
/// # Errors
///
/// Returns an error if the backend call fails.
pub async fn create(
    config: &ClientConfig,
    name: String,
    price: Price,
    img: String,
    token: String,
) -> Result<(), CommandError> {
    let client = remote_client(config)?;
    let item = NewMenuItem { name, price, img };
    let created: Value = client
        .create_menu_item(&item, &BearerToken::new(token))
        .await?;
    print_json(&created)
}
