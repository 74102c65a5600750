// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Introvert service library - exposes testable components
//!
//! # Architecture
//!
//! - **Layer:** Interface / Presentation Layer
//! - **Purpose:** Stores the latest message and serves it back as a page or an echo

pub mod page;
pub mod routes;
pub mod server;

pub use routes::{app, AppState};
pub use server::{run, serve};

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 5000;
