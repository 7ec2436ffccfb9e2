//! HTTP API
//!
//! - [`health`] - liveness and endpoint index
//! - [`orders`] - public order intake
//! - [`catalog`] - static product catalog
//! - [`admin`] - admin login, order management, statistics
//! - [`export`] - Excel / PDF downloads (admin)

pub mod admin;
pub mod catalog;
pub mod export;
pub mod health;
pub mod orders;

use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use http::{Method, StatusCode, Uri, header};
use shared::{AppError, ErrorCode};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// JSON request bodies are capped at 10 KiB
pub const MAX_BODY_BYTES: usize = 10 * 1024;

/// All routes, without middleware or state
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(orders::router())
        .merge(catalog::router())
        .merge(admin::router(state))
        .fallback(route_not_found)
}

/// Fully configured application, used by the listener and by in-process tests
pub fn build_app(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    build_router(&state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Any origin; the storefront and admin panel are served from several hosts
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn route_not_found(uri: Uri) -> AppError {
    tracing::debug!(%uri, "No route");
    AppError::new(ErrorCode::RouteNotFound).with_detail("path", uri.path())
}
