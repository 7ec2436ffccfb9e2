//! Startup and infrastructure errors
//!
//! Request-level failures use [`shared::AppError`]; these are the errors that
//! stop the process from starting or serving.

use thiserror::Error;

use crate::auth::JwtError;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<JwtError> for ServerError {
    fn from(err: JwtError) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
