//! Jollibee Core - Shared types library.
//!
//! This crate defines the records exchanged with the ordering backend and
//! persisted in the local store, along with the typed values they are built
//! from. The `jollibee-client` crate sends and stores them.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, roles and statuses
//! - [`models`] - Entity records and request payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
