// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0
//! # Relay Domain Layer
//!
//! Pure in-memory types. No HTTP, no configuration.
//!
//! | Module | Key Types |
//! |--------|-----------|
//! | [`message`] | `Message`, `MessageError` |
//! | [`queue`] | `MessageQueue` (extrovert outbox) |
//! | [`board`] | `MessageBoard` (introvert's latest message) |
//! | [`echo`] | `shout` transform |

pub mod board;
pub mod echo;
pub mod message;
pub mod queue;

pub use board::MessageBoard;
pub use echo::shout;
pub use message::{Message, MessageError};
pub use queue::MessageQueue;
