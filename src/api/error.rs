use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{error::FetchError, types::ErrorResponse};

/// Failures a handler reports to the caller.
///
/// Bodies carry a fixed category string only; the cause is logged by the
/// handler before the error is returned.
#[derive(Debug)]
pub enum ApiError {
    Query,
    Unauthorized,
    Response,
    Body,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Query => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Response | ApiError::Body => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::Query => "query error",
            ApiError::Unauthorized => "unauthorized",
            ApiError::Response => "response error",
            ApiError::Body => "body error",
        }
    }
}

impl From<&FetchError> for ApiError {
    fn from(e: &FetchError) -> Self {
        match e {
            FetchError::Transport(_) => ApiError::Response,
            FetchError::Body(_) => ApiError::Body,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
