//! `CurrentAdmin` extractor
//!
//! Handlers behind [`require_auth`](super::require_auth) take `CurrentAdmin`
//! as an argument to learn who is calling.

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::AppError;

use crate::auth::CurrentAdmin;
use crate::core::ServerState;

impl FromRequestParts<ServerState> for CurrentAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentAdmin>()
            .cloned()
            .ok_or_else(AppError::unauthorized)
    }
}
