// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Relay metrics
//!
//! Counters are recorded through the `metrics` facade and are no-ops unless
//! an exporter is installed with [`install_prometheus`].

use anyhow::{Context, Result};
use metrics::describe_counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tokio::net::lookup_host;
use tracing::info;

pub const MESSAGES_RECEIVED: &str = "parley_messages_received_total";
pub const MESSAGES_FORWARDED: &str = "parley_messages_forwarded_total";
pub const MESSAGES_REJECTED: &str = "parley_messages_rejected_total";
pub const FORWARD_RETRIES: &str = "parley_forward_retries_total";

pub fn describe_metrics() {
    describe_counter!(MESSAGES_RECEIVED, "Messages accepted on POST /api/message");
    describe_counter!(MESSAGES_FORWARDED, "Messages delivered to the peer service");
    describe_counter!(MESSAGES_REJECTED, "Messages the peer answered with a non-success status");
    describe_counter!(FORWARD_RETRIES, "Delivery attempts that found the peer unreachable");
}

/// Serve Prometheus metrics on `host:port` when a port is configured.
///
/// `host` may be a name such as `localhost`; the first resolved address wins.
pub async fn install_prometheus(host: &str, port: Option<u16>) -> Result<()> {
    let Some(port) = port else {
        return Ok(());
    };

    let addr = resolve_metrics_addr(host, port).await?;

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .context("Failed to install Prometheus exporter")?;

    describe_metrics();
    info!("Prometheus metrics listening on {}", addr);

    Ok(())
}

async fn resolve_metrics_addr(host: &str, port: u16) -> Result<SocketAddr> {
    lookup_host((host, port))
        .await
        .with_context(|| format!("Failed to resolve metrics address {}:{}", host, port))?
        .next()
        .with_context(|| format!("No address found for metrics host {}", host))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolves_hostname() {
        let addr = resolve_metrics_addr("localhost", 9100).await.unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 9100);
    }

    #[tokio::test]
    async fn test_resolves_ip_literal() {
        let addr = resolve_metrics_addr("0.0.0.0", 9100).await.unwrap();
        assert_eq!(addr, "0.0.0.0:9100".parse::<SocketAddr>().unwrap());
    }

    #[tokio::test]
    async fn test_disabled_without_port() {
        install_prometheus("not a host", None).await.unwrap();
    }
}
