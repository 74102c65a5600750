// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Parley Rust SDK
//!
//! HTTP client for talking to a running extrovert or introvert.

pub mod client;

pub use client::MessageClient;
pub use parley_core::application::{Delivery, SinkError};
