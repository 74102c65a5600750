// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Introvert HTTP routes
//!
//! | Route | Behaviour |
//! |-------|-----------|
//! | `GET /` | Page showing the latest message |
//! | `POST /api/message` | Replace the latest message, `200 OK` |
//! | `GET /api/message` | Latest message, uppercased and repeated |
//! | `GET /health` | Liveness and uptime |

use anyhow::Result;
use axum::{
    extract::State,
    response::Html,
    routing::get,
    Router,
};
use metrics::counter;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use parley_core::domain::MessageBoard;
use parley_core::infrastructure::config::EchoConfig;
use parley_core::infrastructure::metrics::MESSAGES_RECEIVED;
use parley_core::presentation::{health_router, ApiError, SubmittedMessage};

use crate::page::PageRenderer;

#[derive(Clone)]
pub struct AppState {
    pub board: Arc<MessageBoard>,
    pub pages: Arc<PageRenderer>,
    pub echo_repeat: usize,
}

pub fn app(board: Arc<MessageBoard>, echo: &EchoConfig) -> Result<Router> {
    let state = AppState {
        board,
        pages: Arc::new(PageRenderer::new()?),
        echo_repeat: echo.echo_repeat,
    };

    Ok(Router::new()
        .route("/", get(index))
        .route("/api/message", get(echo_message).post(post_message))
        .merge(health_router::<AppState>("introvert"))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    state.pages.index(&state.board.current()).map(Html)
}

async fn post_message(
    State(state): State<AppState>,
    SubmittedMessage(message): SubmittedMessage,
) -> Html<&'static str> {
    counter!(MESSAGES_RECEIVED).increment(1);
    info!(length = message.as_str().len(), "New message received");
    state.board.post(message);

    Html("OK")
}

async fn echo_message(State(state): State<AppState>) -> String {
    state.board.echo(state.echo_repeat)
}
