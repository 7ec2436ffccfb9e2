//! Catalog API Handlers

use axum::{Json, extract::Path};
use shared::catalog::{self, Category, Product, ProductFilter};
use shared::{ApiResponse, AppError, ErrorCode};

use crate::AppResult;
use crate::utils::QueryParams;

/// GET /api/products - filtered and sorted product list
pub async fn list(
    QueryParams(filter): QueryParams<ProductFilter>,
) -> Json<ApiResponse<Vec<&'static Product>>> {
    Json(ApiResponse::success(catalog::filter(&filter)))
}

/// GET /api/products/{id}
pub async fn get_by_id(Path(id): Path<String>) -> AppResult<Json<ApiResponse<&'static Product>>> {
    let product = id
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(catalog::product_by_id)
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound).with_detail("id", id))?;
    Ok(Json(ApiResponse::success(product)))
}

/// GET /api/categories
pub async fn categories() -> Json<ApiResponse<&'static [Category]>> {
    Json(ApiResponse::success(catalog::categories()))
}
