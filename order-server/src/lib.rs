//! Ash Meganab order server
//!
//! Public order intake, admin authentication, admin order management and
//! Excel/PDF export over an embedded SQLite database.
//!
//! ```text
//! order-server/src/
//! ├── core/      # configuration, state, startup errors
//! ├── auth/      # JWT, Argon2, middleware, login throttling
//! ├── db/        # pool, migrations, repositories
//! ├── api/       # routes and handlers
//! ├── export/    # xlsx / pdf rendering
//! └── utils/     # logging, extractors
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod export;
pub mod utils;

pub use auth::{CurrentAdmin, JwtService};
pub use core::{Config, Server, ServerState};
pub use shared::{ApiResponse, AppError, AppResult, ErrorCode};

pub use utils::logger::init_logger_with_file;

/// Security event on the `security` tracing target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env` and initialise logging from `LOG_LEVEL`, `LOG_FORMAT` and `LOG_DIR`
pub fn setup_environment() {
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to load .env: {e}");
    }

    let log_level = std::env::var("LOG_LEVEL").ok();
    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    let log_dir = std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty());
    init_logger_with_file(log_level.as_deref(), json, log_dir.as_deref());
}
