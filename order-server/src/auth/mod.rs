//! Admin authentication
//!
//! - [`JwtService`] - token issue and validation
//! - [`password`] - Argon2 hashing for the admin credential
//! - [`require_auth`] / [`require_admin`] - route middleware
//! - [`RateLimiter`] - per-IP login throttling

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod rate_limit;

pub use jwt::{Claims, CurrentAdmin, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth};
pub use password::{hash_password, verify_password};
pub use rate_limit::{RateLimiter, login_rate_limit};
