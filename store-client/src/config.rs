//! Client configuration

use std::path::PathBuf;

/// Business WhatsApp number orders fall back to
pub const DEFAULT_WHATSAPP_NUMBER: &str = "233548551667";

/// Client configuration for the storefront
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Order server base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// WhatsApp number (international format, digits only)
    pub whatsapp_number: String,

    /// Directory for persisted cart/checkout state; `None` keeps it in memory
    pub storage_dir: Option<PathBuf>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Admin bearer token
    pub token: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            storage_dir: None,
            timeout: 30,
            token: None,
        }
    }

    /// Set the WhatsApp fallback number; non-digits are dropped
    pub fn with_whatsapp_number(mut self, number: impl AsRef<str>) -> Self {
        self.whatsapp_number = number
            .as_ref()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        self
    }

    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = Some(dir.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the JWT token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.whatsapp_number, "233548551667");
        assert_eq!(config.timeout, 30);
        assert!(config.storage_dir.is_none());
    }

    #[test]
    fn whatsapp_number_keeps_digits_only() {
        let config = ClientConfig::default().with_whatsapp_number("+233 54 855 1667");
        assert_eq!(config.whatsapp_number, "233548551667");
    }
}
