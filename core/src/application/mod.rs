// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0
//! # Application Layer
//!
//! | Module | Key Types |
//! |--------|-----------|
//! | [`sink`] | `MessageSink` port, `Delivery`, `SinkError` |
//! | [`forwarder`] | `MessageForwarder` background task |

pub mod forwarder;
pub mod sink;

pub use forwarder::{ForwarderConfig, MessageForwarder};
pub use sink::{Delivery, MessageSink, SinkError};
