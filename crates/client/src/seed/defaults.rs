//! Literal demo data written on first run.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Value, json};

/// Key holding the array of customer accounts.
pub const CUSTOMER_USERS_KEY: &str = "customerUsers";
/// Key holding the array of staff accounts.
pub const STAFF_USERS_KEY: &str = "staffUsers";
/// Key holding the array of menu items.
pub const MENU_KEY: &str = "jollibeeMenu";

fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The single demo customer.
pub fn customers(now: DateTime<Utc>) -> Value {
    json!([{
        "id": 1,
        "name": "Demo Customer",
        "email": "customer@jollibee.com",
        "phone": "+1234567890",
        "password": "pass123",
        "role": "customer",
        "createdAt": timestamp(now)
    }])
}

/// One staff account and one admin account.
pub fn staff_users(now: DateTime<Utc>) -> Value {
    let created_at = timestamp(now);
    json!([
        {
            "id": 1,
            "username": "staff1",
            "password": "pass123",
            "role": "staff",
            "name": "Staff Member",
            "createdAt": created_at
        },
        {
            "id": 2,
            "username": "admin",
            "password": "admin123",
            "role": "admin",
            "name": "System Administrator",
            "createdAt": created_at
        }
    ])
}

/// The eight default menu items.
pub fn menu() -> Value {
    json!([
        { "id": 1, "name": "1-pc Chickenjoy w/ Rice", "price": 82, "img": "https://images.unsplash.com/photo-1562967914-608f82629710?w=200&h=200&fit=crop" },
        { "id": 2, "name": "2-pc Burger Steak", "price": 105, "img": "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=200&h=200&fit=crop" },
        { "id": 3, "name": "Jolly Spaghetti", "price": 65, "img": "https://images.unsplash.com/photo-1598866594230-a7c12756260f?w=200&h=200&fit=crop" },
        { "id": 4, "name": "Yumburger", "price": 45, "img": "https://images.unsplash.com/photo-1572802419224-296b0aeee0d9?w=200&h=200&fit=crop" },
        { "id": 5, "name": "Jolly Hotdog", "price": 60, "img": "https://images.unsplash.com/photo-1550317138-10000687a9ef?w=200&h=200&fit=crop" },
        { "id": 6, "name": "Jolly Fries", "price": 55, "img": "https://images.unsplash.com/photo-1573080496219-bb080dd4f877?w=200&h=200&fit=crop" },
        { "id": 7, "name": "Pineapple Juice", "price": 45, "img": "https://images.unsplash.com/photo-1621506289937-a8e4df240d0b?w=200&h=200&fit=crop" },
        { "id": 8, "name": "Peach Mango Pie", "price": 39, "img": "https://images.unsplash.com/photo-1603532648955-039310d9ed75?w=200&h=200&fit=crop" }
    ])
}
