//! Per-IP fixed-window rate limiting for the admin login route

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::core::ServerState;
use crate::security_log;

/// Login attempts allowed per window
pub const LOGIN_MAX_ATTEMPTS: u32 = 5;
/// Login window length
pub const LOGIN_WINDOW_SECS: u64 = 60;

/// Entries idle for longer than this are dropped by [`RateLimiter::cleanup`]
const ENTRY_TTL: Duration = Duration::from_secs(300);

struct IpEntry {
    count: u32,
    window_start: Instant,
}

#[derive(Clone, Default)]
pub struct RateLimiter {
    /// route name -> (IP -> entry)
    inner: Arc<Mutex<HashMap<&'static str, HashMap<String, IpEntry>>>>,
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter").finish_non_exhaustive()
    }
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one request. `Err(retry_after_secs)` when the window is exhausted.
    pub async fn check(
        &self,
        route: &'static str,
        ip: &str,
        max_requests: u32,
        window_secs: u64,
    ) -> Result<(), u64> {
        let mut map = self.inner.lock().await;
        let route_map = map.entry(route).or_default();
        let now = Instant::now();

        let entry = route_map.entry(ip.to_owned()).or_insert_with(|| IpEntry {
            count: 0,
            window_start: now,
        });

        let elapsed = now.duration_since(entry.window_start).as_secs();
        if elapsed >= window_secs {
            entry.count = 0;
            entry.window_start = now;
        }

        entry.count += 1;
        if entry.count <= max_requests {
            Ok(())
        } else {
            Err(window_secs.saturating_sub(elapsed.min(window_secs)).max(1))
        }
    }

    /// Remove stale entries
    pub async fn cleanup(&self) {
        let mut map = self.inner.lock().await;
        let now = Instant::now();

        for route_map in map.values_mut() {
            route_map.retain(|_, entry| now.duration_since(entry.window_start) < ENTRY_TTL);
        }

        map.retain(|_, route_map| !route_map.is_empty());
    }

    /// Number of tracked IPs across all routes
    pub async fn tracked(&self) -> usize {
        self.inner.lock().await.values().map(HashMap::len).sum()
    }
}

/// Client IP used as the rate-limit key.
///
/// The peer address unless `trust_proxy` is set; then the last
/// `X-Forwarded-For` hop, which is the one the proxy appended. Earlier
/// entries are client-supplied and never used.
pub fn extract_ip(request: &Request, trust_proxy: bool) -> String {
    if trust_proxy
        && let Some(forwarded) = request.headers().get("x-forwarded-for")
        && let Ok(val) = forwarded.to_str()
        && let Some(last) = val.rsplit(',').next()
    {
        let ip = last.trim();
        if !ip.is_empty() {
            return ip.to_owned();
        }
    }

    request
        .extensions()
        .get::<axum::extract::ConnectInfo<std::net::SocketAddr>>()
        .map(|ci| ci.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_owned())
}

/// Login throttle: 5 attempts per minute per IP
pub async fn login_rate_limit(
    State(state): State<ServerState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let ip = extract_ip(&request, state.config.trust_proxy);
    if let Err(retry_after) = state
        .rate_limiter
        .check("login", &ip, LOGIN_MAX_ATTEMPTS, LOGIN_WINDOW_SECS)
        .await
    {
        security_log!("WARN", "login_rate_limited", ip = ip.clone());
        return Err(AppError::too_many_attempts(retry_after));
    }
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn allows_up_to_limit_then_blocks() {
        let limiter = RateLimiter::new();
        for _ in 0..3 {
            assert!(limiter.check("login", "1.2.3.4", 3, 60).await.is_ok());
        }
        let retry = limiter.check("login", "1.2.3.4", 3, 60).await.unwrap_err();
        assert!((1..=60).contains(&retry));
    }

    #[tokio::test]
    async fn ips_and_routes_are_independent() {
        let limiter = RateLimiter::new();
        assert!(limiter.check("login", "a", 1, 60).await.is_ok());
        assert!(limiter.check("login", "a", 1, 60).await.is_err());
        assert!(limiter.check("login", "b", 1, 60).await.is_ok());
        assert!(limiter.check("other", "a", 1, 60).await.is_ok());
        assert_eq!(limiter.tracked().await, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn window_resets_and_cleanup_drops_stale_entries() {
        let limiter = RateLimiter::new();
        assert!(limiter.check("login", "a", 1, 60).await.is_ok());
        assert!(limiter.check("login", "a", 1, 60).await.is_err());

        tokio::time::advance(Duration::from_secs(61)).await;
        assert!(limiter.check("login", "a", 1, 60).await.is_ok());

        tokio::time::advance(Duration::from_secs(301)).await;
        limiter.cleanup().await;
        assert_eq!(limiter.tracked().await, 0);
    }

    fn with_peer(forwarded: Option<&str>) -> Request {
        let mut builder = Request::builder();
        if let Some(value) = forwarded {
            builder = builder.header("x-forwarded-for", value);
        }
        let mut req = builder.body(axum::body::Body::empty()).unwrap();
        let peer: std::net::SocketAddr = "192.0.2.10:40000".parse().unwrap();
        req.extensions_mut().insert(axum::extract::ConnectInfo(peer));
        req
    }

    #[test]
    fn forwarded_for_is_ignored_without_trusted_proxy() {
        let req = with_peer(Some("203.0.113.7"));
        assert_eq!(extract_ip(&req, false), "192.0.2.10");

        let req = Request::builder().body(axum::body::Body::empty()).unwrap();
        assert_eq!(extract_ip(&req, false), "unknown");
    }

    #[test]
    fn trusted_proxy_uses_last_hop() {
        let req = with_peer(Some("198.51.100.9, 203.0.113.7"));
        assert_eq!(extract_ip(&req, true), "203.0.113.7");

        let req = with_peer(None);
        assert_eq!(extract_ip(&req, true), "192.0.2.10");
    }
}
