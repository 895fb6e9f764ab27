//! Response shapes and the mapping from store results/errors to HTTP.

use crate::errors::AppError;
use crate::models::record::Record;
use crate::models::slot::Header;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::error;

/// `{status, message}` acknowledgement envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    pub message: String,
}

/// List-read body. `header` is attached whatever slots are filled.
#[derive(Debug, Clone, Serialize)]
pub struct DietResponse {
    pub data: Vec<Record>,
    pub header: Header,
}

impl DietResponse {
    pub fn new(data: Vec<Record>) -> Self {
        Self {
            data,
            header: Header,
        }
    }
}

pub fn envelope(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ApiResponse {
        status: status.as_u16(),
        message: message.into(),
    };
    (status, Json(body)).into_response()
}

pub fn ok_request<T: Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

pub fn created() -> Response {
    envelope(StatusCode::OK, "Created Diets")
}

pub fn deleted() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

pub fn bad_request(msg: &str, err: impl Display) -> Response {
    envelope(StatusCode::BAD_REQUEST, format!("{}: {}", msg, err))
}

pub fn not_found(id: i64) -> Response {
    envelope(StatusCode::NOT_FOUND, format!("{} not found", id))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ConstraintViolation { .. } => {
                envelope(StatusCode::CONFLICT, self.to_string())
            }
            e if e.is_caller_error() => envelope(StatusCode::BAD_REQUEST, e.to_string()),
            e => {
                error!(error = %e, "request failed");
                envelope(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}
