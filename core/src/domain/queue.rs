// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Outbound message queue
//!
//! Unbounded FIFO shared between the extrovert's HTTP handlers (producers)
//! and the forwarder (single consumer). The consumer peeks the front, delivers
//! it, and only then pops it, so a message survives failed delivery attempts.

use parking_lot::Mutex;
use std::collections::VecDeque;
use tokio::sync::Notify;
use tracing::debug;

use super::message::Message;

#[derive(Debug, Default)]
pub struct MessageQueue {
    items: Mutex<VecDeque<Message>>,
    available: Notify,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the back of the queue and wake the consumer.
    pub fn push(&self, message: Message) {
        let depth = {
            let mut items = self.items.lock();
            items.push_back(message);
            items.len()
        };
        debug!(depth, "Message queued");
        self.available.notify_one();
    }

    /// Front of the queue, left in place.
    pub fn peek(&self) -> Option<Message> {
        self.items.lock().front().cloned()
    }

    pub fn pop(&self) -> Option<Message> {
        self.items.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Resolve once the queue holds at least one message.
    ///
    /// `notify_one` stores a permit when nobody is waiting, so a push that
    /// lands between the emptiness check and the await is not missed.
    pub async fn wait_for_message(&self) {
        loop {
            if !self.is_empty() {
                return;
            }
            self.available.notified().await;
        }
    }
}
