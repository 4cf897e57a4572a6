//! Request extractors that reject with [`AppError`]
//!
//! Axum's own `Json` and `Path` rejections answer in plain text; these
//! wrappers turn them into the JSON error body every other failure uses.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use shared::error::AppError;

use crate::core::ServerState;

/// Employee id taken from the `{id}` path segment
#[derive(Debug, Clone, Copy)]
pub struct EmployeeId(pub i64);

impl FromRequestParts<ServerState> for EmployeeId {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::invalid_request(e.body_text()))?;
        Ok(Self(id))
    }
}

/// JSON request body
///
/// A body that parses but has missing or mistyped fields is a validation
/// failure (422); anything else is an invalid request (400).
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> FromRequest<ServerState> for JsonBody<T>
where
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &ServerState) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::JsonDataError(e)) => Err(AppError::validation(e.body_text())),
            Err(e) => Err(AppError::invalid_request(e.body_text())),
        }
    }
}
