//! Server configuration, state and startup errors
//!
//! - [`Config`] - environment-driven configuration
//! - [`ServerState`] - shared handler state
//! - [`Server`] - HTTP listener
//! - [`ServerError`] - startup errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{AdminCredentials, Config};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
