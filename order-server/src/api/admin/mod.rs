//! Admin API
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/admin/login | POST | none (rate limited) |
//! | /api/admin/me | GET | admin |
//! | /api/admin/orders | GET | admin |
//! | /api/admin/orders/stats | GET | admin |
//! | /api/admin/orders/{id} | GET, PUT, DELETE | admin |
//! | /api/admin/export/excel, /api/admin/export/pdf | GET | admin |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::api::export;
use crate::auth::{login_rate_limit, require_admin, require_auth};
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    let login = Router::new()
        .route("/api/admin/login", post(handler::login))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            login_rate_limit,
        ));

    // route_layer: unknown paths fall through to the 404 fallback unauthenticated
    let protected = Router::new()
        .route("/api/admin/me", get(handler::me))
        .route("/api/admin/orders", get(handler::list))
        .route("/api/admin/orders/stats", get(handler::stats))
        .route(
            "/api/admin/orders/{id}",
            get(handler::get_by_id)
                .put(handler::update_status)
                .delete(handler::delete),
        )
        .merge(export::router())
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    login.merge(protected)
}
