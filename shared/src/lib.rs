//! Shared types for the Ash Meganab storefront
//!
//! Types used by both the order server and the store client: error codes and
//! the API envelope, the order model with its validation rules, money math,
//! and the static product catalog.

pub mod catalog;
pub mod error;
pub mod models;
pub mod money;
pub mod util;
pub mod validation;

// Re-exports
pub use axum::Json;
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
