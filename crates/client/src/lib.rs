//! Jollibee ordering client library.
//!
//! Two independent pieces share the record types from `jollibee-core`:
//!
//! - [`api`] - [`JollibeeClient`], one method per backend endpoint
//!   (customer and staff auth, menu, orders)
//! - [`seed`] - writes demo accounts and the default menu into a
//!   [`store::KeyValueStore`] when they are missing
//!
//! Configuration is loaded from the environment by [`config`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod seed;
pub mod store;

pub use api::{ApiError, BearerToken, JollibeeClient};
pub use config::{ClientConfig, ConfigError};
pub use seed::{SeedReport, ensure_defaults, ensure_defaults_at};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
