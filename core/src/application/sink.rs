// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Outbound delivery port
//!
//! The forwarder talks to its peer only through [`MessageSink`]. The HTTP
//! implementation lives in `parley-sdk`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Message;

/// Outcome of a delivery attempt that reached the peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Accepted,
    /// The peer answered with this non-success HTTP status.
    Rejected(u16),
}

/// Delivery attempts that never got an answer from the peer.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("peer unreachable: {0}")]
    Unreachable(String),

    #[error("transport failure: {0}")]
    Transport(String),
}

#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn deliver(&self, message: &Message) -> Result<Delivery, SinkError>;
}
