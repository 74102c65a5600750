// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0
//! # `parley-core` — Shared Relay Primitives
//!
//! Everything the two relay services have in common: the message value type,
//! the extrovert's outbound queue, the introvert's message board, the
//! background forwarder, and the HTTP and process plumbing both binaries use.
//!
//! ## Crate Layout
//!
//! | Module | Layer | Contents |
//! |--------|-------|----------|
//! | [`domain`] | Domain | `Message`, `MessageQueue`, `MessageBoard`, `shout` |
//! | [`application`] | Application | `MessageForwarder`, `MessageSink` port |
//! | [`infrastructure`] | Infrastructure | Config, logging, metrics, shutdown signal |
//! | [`presentation`] | Presentation | Form extraction, `ApiError`, `/health` route |

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
