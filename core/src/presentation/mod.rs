// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0
//! # Presentation Layer
//!
//! HTTP pieces both services mount. No relay logic lives here.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`form`] | `SubmittedMessage` extractor for `POST /api/message` |
//! | [`error`] | `ApiError` and its HTTP mapping |
//! | [`health`] | `GET /health` route |

pub mod error;
pub mod form;
pub mod health;

pub use error::{ApiError, MISSING_MESSAGE};
pub use form::{MessageForm, SubmittedMessage};
pub use health::health_router;
