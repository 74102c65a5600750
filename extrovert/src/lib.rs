// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Extrovert service library - exposes testable components
//!
//! # Architecture
//!
//! - **Layer:** Interface / Presentation Layer
//! - **Purpose:** Accepts messages over HTTP and hands them to the forwarder

pub mod routes;
pub mod server;

pub use routes::{app, AppState};
pub use server::{run, serve};

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 4567;
