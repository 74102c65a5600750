// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Introvert message board
//!
//! Holds exactly one message: the last one posted. Every post overwrites it.

use parking_lot::RwLock;

use super::echo::shout;
use super::message::Message;

/// Shown until the first message arrives.
pub const PLACEHOLDER: &str = "No message given yet.";

#[derive(Debug)]
pub struct MessageBoard {
    latest: RwLock<String>,
}

impl MessageBoard {
    pub fn new() -> Self {
        Self {
            latest: RwLock::new(PLACEHOLDER.to_string()),
        }
    }

    /// Replace the current message.
    pub fn post(&self, message: Message) {
        *self.latest.write() = message.into_inner();
    }

    pub fn current(&self) -> String {
        self.latest.read().clone()
    }

    /// The current message, uppercased and repeated.
    pub fn echo(&self, repeat: usize) -> String {
        shout(&self.latest.read(), repeat)
    }
}

impl Default for MessageBoard {
    fn default() -> Self {
        Self::new()
    }
}
