use crate::auth::{JwtConfig, password};
use crate::core::error::{Result, ServerError};

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Notes |
/// |----------|---------|-------|
/// | HTTP_PORT | 3000 | |
/// | DATABASE_URL | sqlite:data/orders.db | |
/// | DB_MAX_CONNECTIONS | 5 | |
/// | ENVIRONMENT | development | development / staging / production |
/// | ADMIN_EMAIL | admin@ashmeganab.com (development only) | |
/// | ADMIN_PASSWORD_HASH | | Argon2 PHC string, preferred over ADMIN_PASSWORD |
/// | ADMIN_PASSWORD | dev placeholder (development only) | hashed at startup |
/// | JWT_SECRET / JWT_EXPIRATION_MINUTES / JWT_ISSUER | see [`JwtConfig`] | |
/// | REQUEST_TIMEOUT_MS | 30000 | |
/// | TRUST_PROXY | false | `true`/`1` behind one reverse proxy: client IP from `X-Forwarded-For` |
///
/// Logging (`LOG_LEVEL`, `LOG_FORMAT`, `LOG_DIR`) is read earlier by
/// [`crate::setup_environment`].
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    /// development | staging | production
    pub environment: String,
    pub admin: AdminCredentials,
    pub jwt: JwtConfig,
    pub request_timeout_ms: u64,
    /// Take the client IP from the last `X-Forwarded-For` hop instead of the peer
    pub trust_proxy: bool,
}

/// The single admin account
#[derive(Clone)]
pub struct AdminCredentials {
    pub email: String,
    /// Argon2 PHC string
    pub password_hash: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

impl AdminCredentials {
    /// Build from a plain password, hashing it with Argon2
    pub fn from_password(email: impl Into<String>, password: &str) -> Result<Self> {
        let password_hash = password::hash_password(password)
            .map_err(|e| ServerError::Config(format!("Failed to hash admin password: {e}")))?;
        Ok(Self {
            email: email.into().trim().to_lowercase(),
            password_hash,
        })
    }

    /// Case-insensitive email match plus password verification
    pub fn verify(&self, email: &str, password: &str) -> bool {
        let email_matches = self.email == email.trim().to_lowercase();
        // Always run the hash check so timing does not reveal a wrong email
        let password_matches = password::verify_password(password, &self.password_hash);
        email_matches && password_matches
    }

    fn from_env(environment: &str) -> Result<Self> {
        let email = match std::env::var("ADMIN_EMAIL") {
            Ok(email) if !email.trim().is_empty() => email,
            _ if environment == "development" => "admin@ashmeganab.com".to_string(),
            _ => {
                return Err(ServerError::Config(format!(
                    "ADMIN_EMAIL must be set in {environment} environment"
                )));
            }
        };

        if let Ok(hash) = std::env::var("ADMIN_PASSWORD_HASH") {
            if !password::is_valid_hash(&hash) {
                return Err(ServerError::Config(
                    "ADMIN_PASSWORD_HASH is not a valid Argon2 PHC string".into(),
                ));
            }
            return Ok(Self {
                email: email.trim().to_lowercase(),
                password_hash: hash,
            });
        }

        let password = require_secret("ADMIN_PASSWORD", environment)?;
        Self::from_password(email, &password)
    }
}

/// Read a secret; outside development it must be set and non-empty.
fn require_secret(name: &str, environment: &str) -> Result<String> {
    let val = match std::env::var(name) {
        Ok(v) => v,
        Err(_) => {
            if environment != "development" {
                return Err(ServerError::Config(format!(
                    "{name} must be set in {environment} environment"
                )));
            }
            tracing::warn!("{name} not set, using development placeholder");
            format!("dev-{name}-not-for-production")
        }
    };
    if val.is_empty() && environment != "development" {
        return Err(ServerError::Config(format!(
            "{name} must not be empty in {environment} environment"
        )));
    }
    Ok(val)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Ok(Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:data/orders.db".into()),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            admin: AdminCredentials::from_env(&environment)?,
            jwt: JwtConfig::from_env(&environment)?,
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30_000),
            trust_proxy: std::env::var("TRUST_PROXY")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            environment,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
