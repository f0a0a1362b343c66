//! Staff accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{StaffRole, StaffUserId};

/// A staff or admin account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffUser {
    pub id: StaffUserId,
    pub username: String,
    pub password: String,
    pub role: StaffRole,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /staff/users` (admin only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStaffUser {
    pub username: String,
    pub password: String,
    pub role: StaffRole,
    pub name: String,
}

/// Login payload for `POST /staff/login`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StaffCredentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub role: StaffRole,
}
