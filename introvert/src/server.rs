// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Introvert process wiring.

use anyhow::{Context, Result};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use parley_core::domain::MessageBoard;
use parley_core::infrastructure::config::{EchoConfig, ServiceConfig};
use parley_core::infrastructure::metrics::install_prometheus;
use parley_core::infrastructure::shutdown::shutdown_signal;

use crate::routes::app;
use crate::DEFAULT_PORT;

/// Run the introvert until Ctrl+C or SIGTERM.
pub async fn run(service: ServiceConfig, echo: EchoConfig) -> Result<()> {
    service.validate().context("Invalid service configuration")?;

    install_prometheus(&service.host, service.metrics_port).await?;

    let addr = service.bind_address(DEFAULT_PORT);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Introvert listening on {}", addr);

    serve(listener, echo, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, echo: EchoConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let board = Arc::new(MessageBoard::new());
    let router = app(board, &echo)?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    info!("Introvert shutting down");

    Ok(())
}
