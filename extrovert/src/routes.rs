// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Extrovert HTTP routes
//!
//! | Route | Behaviour |
//! |-------|-----------|
//! | `GET /` | Static message form |
//! | `POST /api/message` | Queue the message, `303` back to `/` |
//! | `GET /health` | Liveness and uptime |

use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::{get, post},
    Router,
};
use metrics::counter;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use parley_core::domain::MessageQueue;
use parley_core::infrastructure::metrics::MESSAGES_RECEIVED;
use parley_core::presentation::{health_router, SubmittedMessage};

const INDEX_HTML: &str = include_str!("../assets/index.html");

#[derive(Clone)]
pub struct AppState {
    pub queue: Arc<MessageQueue>,
}

pub fn app(queue: Arc<MessageQueue>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/message", post(submit_message))
        .merge(health_router::<AppState>("extrovert"))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { queue })
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn submit_message(
    State(state): State<AppState>,
    SubmittedMessage(message): SubmittedMessage,
) -> Redirect {
    counter!(MESSAGES_RECEIVED).increment(1);
    state.queue.push(message);
    info!(pending = state.queue.len(), "Message accepted for forwarding");

    Redirect::to("/")
}
