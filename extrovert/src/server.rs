// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0

//! Extrovert process wiring: queue, forwarder and HTTP listener.

use anyhow::{Context, Result};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use parley_core::application::{ForwarderConfig, MessageForwarder};
use parley_core::domain::MessageQueue;
use parley_core::infrastructure::config::{PeerConfig, ServiceConfig};
use parley_core::infrastructure::metrics::install_prometheus;
use parley_core::infrastructure::shutdown::shutdown_signal;
use parley_sdk::MessageClient;

use crate::routes::app;
use crate::DEFAULT_PORT;

/// Run the extrovert until Ctrl+C or SIGTERM.
pub async fn run(service: ServiceConfig, peer: PeerConfig) -> Result<()> {
    service.validate().context("Invalid service configuration")?;
    peer.validate().context("Invalid introvert configuration")?;

    install_prometheus(&service.host, service.metrics_port).await?;

    let addr = service.bind_address(DEFAULT_PORT);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Extrovert listening on {}", addr);

    serve(
        listener,
        peer.base_url(),
        peer.forwarder_config(),
        shutdown_signal(),
    )
    .await
}

/// Serve on an already bound listener, forwarding to the introvert at `peer_url`.
///
/// The forwarder is stopped after the HTTP server has drained. Messages still
/// queued at that point are dropped.
pub async fn serve<F>(
    listener: TcpListener,
    peer_url: String,
    forwarder_config: ForwarderConfig,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let queue = Arc::new(MessageQueue::new());
    let client = MessageClient::new(peer_url).context("Failed to build introvert client")?;

    info!(peer = %client.base_url(), "Forwarding messages to introvert");

    let forwarder = MessageForwarder::new(queue.clone(), Arc::new(client), forwarder_config);
    let forwarder_token = forwarder.shutdown_token();
    let forwarder_handle = forwarder.start();

    let served = axum::serve(listener, app(queue))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed");

    forwarder_token.cancel();
    forwarder_handle
        .await
        .context("Forwarder task failed")?;

    info!("Extrovert shutting down");

    served
}
