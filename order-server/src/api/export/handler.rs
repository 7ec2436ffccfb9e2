//! Export API Handlers

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use shared::util;

use crate::AppResult;
use crate::core::ServerState;
use crate::db::repository::order;
use crate::export::{excel, pdf};

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const PDF_CONTENT_TYPE: &str = "application/pdf";

fn attachment(content_type: &str, extension: &str, bytes: Vec<u8>) -> Response {
    let filename = format!("ashmeganab-orders-{}.{extension}", util::now_millis());
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        bytes,
    )
        .into_response()
}

/// GET /api/admin/export/excel - all orders, newest first
pub async fn excel(State(state): State<ServerState>) -> AppResult<Response> {
    let orders = order::find_all(&state.pool).await?;
    let bytes = excel::render(&orders)?;
    tracing::info!(orders = orders.len(), bytes = bytes.len(), "Excel export generated");
    Ok(attachment(XLSX_CONTENT_TYPE, "xlsx", bytes))
}

/// GET /api/admin/export/pdf
pub async fn pdf(State(state): State<ServerState>) -> AppResult<Response> {
    let orders = order::find_all(&state.pool).await?;
    let bytes = pdf::render(&orders)?;
    tracing::info!(orders = orders.len(), bytes = bytes.len(), "PDF export generated");
    Ok(attachment(PDF_CONTENT_TYPE, "pdf", bytes))
}
