// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::domain::MessageError;

/// Body returned when `POST /api/message` carries no usable message.
pub const MISSING_MESSAGE: &str = "You must submit a message with the request.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid message: {0}")]
    InvalidMessage(#[from] MessageError),

    #[error("failed to render page: {0}")]
    Render(#[from] handlebars::RenderError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidMessage(_) => {
                (StatusCode::BAD_REQUEST, Html(MISSING_MESSAGE)).into_response()
            }
            ApiError::Render(e) => {
                error!("Page rendering failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html("Internal Server Error"),
                )
                    .into_response()
            }
        }
    }
}
