//! Order API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::ApiResponse;
use shared::models::{OrderCreate, OrderReceipt};

use crate::core::ServerState;
use crate::db::repository::order;
use crate::utils::JsonBody;
use crate::AppResult;

/// POST /api/orders - submit an order from the storefront
///
/// Nothing is written unless the whole payload validates.
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<OrderCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<OrderReceipt>>)> {
    let new_order = payload.validate()?;
    let created = order::create(&state.pool, new_order).await?;

    tracing::info!(
        order_id = %created.order_id,
        product = %created.product_name,
        quantity = created.quantity,
        total = created.total_price_ghs,
        "Order created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            "Order created successfully",
            OrderReceipt::from(&created),
        )),
    ))
}
