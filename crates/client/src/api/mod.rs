//! REST client for the ordering backend.
//!
//! This module provides:
//! - [`JollibeeClient`] with one method per endpoint
//! - [`BearerToken`] for protected routes
//! - [`ApiError`] distinguishing transport, parse and HTTP status failures
//!
//! Every method issues exactly one request and never retries. Tokens are
//! forwarded as `Authorization: Bearer <token>` without inspection; the
//! backend decides whether they are valid.

mod client;
mod error;
mod types;

pub use client::JollibeeClient;
pub use error::ApiError;
pub use types::BearerToken;
