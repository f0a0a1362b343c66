//! Entity records and request payloads.
//!
//! Records are plain data: the client never mutates them and performs no
//! validation beyond what the field types themselves guarantee. JSON field
//! names are camelCase on the wire and in the local store.

pub mod customer;
pub mod menu;
pub mod order;
pub mod staff;

pub use customer::{Customer, CustomerCredentials, NewCustomer};
pub use menu::{MenuItem, NewMenuItem};
pub use order::{Order, StatusUpdate};
pub use staff::{NewStaffUser, StaffCredentials, StaffUser};
