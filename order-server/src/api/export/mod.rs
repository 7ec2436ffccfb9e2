//! Order export downloads (mounted inside the admin router)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/admin/export/excel", get(handler::excel))
        .route("/api/admin/export/pdf", get(handler::pdf))
}
