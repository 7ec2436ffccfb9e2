//! Health and discovery routes
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /health | GET | none |
//! | /health/detailed | GET | none |
//! | /api | GET | none |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use serde_json::{Value, json};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/detailed", get(detailed_health))
        .route("/api", get(index))
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    /// RFC 3339
    timestamp: String,
    uptime_secs: u64,
}

#[derive(Serialize)]
pub struct DetailedHealthResponse {
    status: &'static str,
    version: &'static str,
    uptime_secs: u64,
    database: CheckResult,
}

#[derive(Serialize)]
pub struct CheckResult {
    status: &'static str,
    latency_ms: Option<u64>,
    message: Option<String>,
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime_secs: state.uptime_secs(),
    })
}

pub async fn detailed_health(State(state): State<ServerState>) -> Json<DetailedHealthResponse> {
    let db_start = std::time::Instant::now();
    let database = match sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&state.pool)
        .await
    {
        Ok(_) => CheckResult {
            status: "ok",
            latency_ms: Some(db_start.elapsed().as_millis() as u64),
            message: None,
        },
        Err(e) => CheckResult {
            status: "error",
            latency_ms: None,
            message: Some(format!("Database error: {e}")),
        },
    };

    Json(DetailedHealthResponse {
        status: if database.status == "ok" { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.uptime_secs(),
        database,
    })
}

/// Endpoint index
pub async fn index() -> Json<Value> {
    Json(json!({
        "name": "Ash Meganab Admin API",
        "version": "1.0.0",
        "endpoints": {
            "public": {
                "POST /api/orders": "Create a new order",
                "GET /api/products": "List catalog products",
                "GET /api/products/{id}": "Get a catalog product",
                "GET /api/categories": "List catalog categories"
            },
            "admin": {
                "POST /api/admin/login": "Admin login",
                "GET /api/admin/orders": "Get all orders (protected)",
                "GET /api/admin/orders/{id}": "Get single order (protected)",
                "PUT /api/admin/orders/{id}": "Update order status (protected)",
                "DELETE /api/admin/orders/{id}": "Delete order (protected)",
                "GET /api/admin/orders/stats": "Get order statistics (protected)",
                "GET /api/admin/export/excel": "Export to Excel (protected)",
                "GET /api/admin/export/pdf": "Export to PDF (protected)"
            }
        }
    }))
}
