// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0
//! # Infrastructure Layer
//!
//! Process-level concerns shared by both services.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | clap/env configuration and `.env` loading |
//! | [`logging`] | `tracing-subscriber` setup |
//! | [`metrics`] | Counter names and the optional Prometheus exporter |
//! | [`shutdown`] | Ctrl+C / SIGTERM future for graceful shutdown |

pub mod config;
pub mod logging;
pub mod metrics;
pub mod shutdown;
