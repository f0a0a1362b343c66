//! Menu items.

use serde::{Deserialize, Serialize};

use crate::types::{MenuItemId, Price};

/// An item on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Price,
    /// Image URI.
    pub img: String,
}

/// Payload for `POST /menu/items` (admin only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub name: String,
    pub price: Price,
    pub img: String,
}
