//! Data models
//!
//! Shared between order-server, store-client and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.

pub mod auth;
pub mod order;

// Re-exports
pub use auth::*;
pub use order::*;
