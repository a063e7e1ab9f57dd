//! Request handlers.

pub mod dacbiet;
pub mod dande;
pub mod health;

use axum::{Json, extract::rejection::JsonRejection};

use crate::error::{AppError, Result};

/// Unwrap a JSON body, reporting a rejection through the error envelope.
fn read_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
