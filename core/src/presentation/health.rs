// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0

use axum::{routing::get, Json, Router};
use std::time::Instant;

/// `GET /health` reporting the service name and uptime.
pub fn health_router<S>(service: &'static str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let started = Instant::now();

    Router::new().route(
        "/health",
        get(move || async move {
            Json(serde_json::json!({
                "status": "healthy",
                "service": service,
                "uptime_seconds": started.elapsed().as_secs(),
            }))
        }),
    )
}
