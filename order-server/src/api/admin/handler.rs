//! Admin API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{
    ADMIN_ROLE, AdminInfo, LoginRequest, LoginResponse, Order, OrderPage, OrderQuery, OrderStats,
    OrderStatusUpdate,
};
use shared::validation::{MAX_PASSWORD_LEN, normalize_optional};
use shared::{ApiResponse, AppError, ErrorCode};

use crate::auth::CurrentAdmin;
use crate::core::ServerState;
use crate::db::repository::{RepoError, order, order::OrderKey};
use crate::utils::{JsonBody, QueryParams};
use crate::{AppResult, security_log};

/// POST /api/admin/login
pub async fn login(
    State(state): State<ServerState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let email = normalize_optional(req.email);
    let password = req.password.filter(|p| !p.is_empty());
    let (Some(email), Some(password)) = (email, password) else {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            "Please provide email and password",
        )
        .with_detail("fields", vec!["email", "password"]));
    };
    if password.chars().count() > MAX_PASSWORD_LEN {
        return Err(AppError::invalid_credentials());
    }

    // Argon2 is CPU-bound; keep it off the async workers
    let admin = state.config.admin.clone();
    let attempted = email.clone();
    let verified = tokio::task::spawn_blocking(move || admin.verify(&attempted, &password))
        .await
        .map_err(|e| AppError::internal(format!("Credential check failed: {e}")))?;

    if !verified {
        security_log!("WARN", "login_failed", email = email.clone());
        return Err(AppError::invalid_credentials());
    }

    let admin_email = state.config.admin.email.clone();
    let token = state
        .jwt_service
        .generate_token(&admin_email, ADMIN_ROLE)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    security_log!("INFO", "login_success", email = admin_email.clone());

    Ok(Json(ApiResponse::success_with_message(
        "Login successful",
        LoginResponse {
            token,
            admin: AdminInfo {
                email: admin_email,
                role: ADMIN_ROLE.to_string(),
            },
        },
    )))
}

/// GET /api/admin/me - identity behind the bearer token
pub async fn me(admin: CurrentAdmin) -> Json<ApiResponse<AdminInfo>> {
    Json(ApiResponse::success(AdminInfo {
        email: admin.email,
        role: admin.role,
    }))
}

/// GET /api/admin/orders
pub async fn list(
    State(state): State<ServerState>,
    QueryParams(query): QueryParams<OrderQuery>,
) -> AppResult<Json<ApiResponse<OrderPage>>> {
    let filter = query.into_filter()?;
    let page = order::list(&state.pool, &filter).await?;
    Ok(Json(ApiResponse::success(page)))
}

/// GET /api/admin/orders/{id} - numeric id or `ORD-` reference
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let found = order::find(&state.pool, &OrderKey::parse(&id))
        .await?
        .ok_or_else(|| AppError::order_not_found(id))?;
    Ok(Json(ApiResponse::success(found)))
}

/// PUT /api/admin/orders/{id}
pub async fn update_status(
    State(state): State<ServerState>,
    admin: CurrentAdmin,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<OrderStatusUpdate>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let status = payload.status()?;
    let updated = match order::update_status(&state.pool, &OrderKey::parse(&id), status).await {
        Ok(updated) => updated,
        Err(RepoError::NotFound(_)) => return Err(AppError::order_not_found(id)),
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        order_id = %updated.order_id,
        status = %status,
        by = %admin.email,
        "Order status updated"
    );

    Ok(Json(ApiResponse::success_with_message(
        "Order status updated successfully",
        updated,
    )))
}

/// DELETE /api/admin/orders/{id}
pub async fn delete(
    State(state): State<ServerState>,
    admin: CurrentAdmin,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    match order::delete(&state.pool, &OrderKey::parse(&id)).await {
        Ok(()) => {}
        Err(RepoError::NotFound(_)) => return Err(AppError::order_not_found(id)),
        Err(e) => return Err(e.into()),
    }

    tracing::info!(id = %id, by = %admin.email, "Order deleted");

    Ok(Json(ApiResponse {
        message: "Order deleted successfully".to_string(),
        ..ApiResponse::ok()
    }))
}

/// GET /api/admin/orders/stats
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<OrderStats>>> {
    let stats = order::stats(&state.pool).await?;
    Ok(Json(ApiResponse::success(stats)))
}
