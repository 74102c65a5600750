// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Message Forwarder
//!
//! Background task that drains the extrovert's [`MessageQueue`] into a
//! [`MessageSink`], one message at a time, in insertion order.
//!
//! # Delivery rules
//!
//! - Accepted by the peer: removed from the queue.
//! - Rejected by the peer (non-success status): removed and logged. Resending
//!   the same body would be rejected again.
//! - No answer (peer down, connection refused, transport error): kept at the
//!   front of the queue and retried after a fixed delay, forever.
//!
//! The loop sleeps on the queue instead of polling it and exits promptly when
//! its [`CancellationToken`] fires.

use metrics::counter;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::sink::{Delivery, MessageSink};
use crate::domain::MessageQueue;
use crate::infrastructure::metrics::{FORWARD_RETRIES, MESSAGES_FORWARDED, MESSAGES_REJECTED};

/// Forwarder tuning
#[derive(Debug, Clone)]
pub struct ForwarderConfig {
    /// Pause between attempts while the peer is unreachable
    pub retry_delay: Duration,
}

impl Default for ForwarderConfig {
    fn default() -> Self {
        Self {
            retry_delay: Duration::from_secs(2),
        }
    }
}

enum Step {
    Continue,
    Stop,
}

pub struct MessageForwarder {
    queue: Arc<MessageQueue>,
    sink: Arc<dyn MessageSink>,
    config: ForwarderConfig,
    shutdown_token: CancellationToken,
}

impl MessageForwarder {
    pub fn new(
        queue: Arc<MessageQueue>,
        sink: Arc<dyn MessageSink>,
        config: ForwarderConfig,
    ) -> Self {
        Self {
            queue,
            sink,
            config,
            shutdown_token: CancellationToken::new(),
        }
    }

    /// Get a handle to trigger shutdown
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown_token.clone()
    }

    /// Spawn the forwarding loop onto the current runtime.
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.run().await;
        })
    }

    /// Run until the shutdown token is cancelled.
    pub async fn run(&self) {
        info!(
            retry_delay_ms = self.config.retry_delay.as_millis() as u64,
            "Starting message forwarder"
        );

        loop {
            tokio::select! {
                _ = self.queue.wait_for_message() => {}
                _ = self.shutdown_token.cancelled() => break,
            }

            if let Step::Stop = self.forward_next().await {
                break;
            }
        }

        info!(pending = self.queue.len(), "Message forwarder stopped");
    }

    async fn forward_next(&self) -> Step {
        let Some(message) = self.queue.peek() else {
            return Step::Continue;
        };

        let outcome = tokio::select! {
            outcome = self.sink.deliver(&message) => outcome,
            _ = self.shutdown_token.cancelled() => return Step::Stop,
        };

        match outcome {
            Ok(Delivery::Accepted) => {
                self.queue.pop();
                counter!(MESSAGES_FORWARDED).increment(1);
                debug!(pending = self.queue.len(), "Message forwarded");
            }
            Ok(Delivery::Rejected(status)) => {
                self.queue.pop();
                counter!(MESSAGES_REJECTED).increment(1);
                warn!(status, "Peer rejected message, dropping it");
            }
            Err(e) => {
                counter!(FORWARD_RETRIES).increment(1);
                warn!(
                    error = %e,
                    retry_in_ms = self.config.retry_delay.as_millis() as u64,
                    "Peer not reachable, will retry"
                );

                tokio::select! {
                    _ = tokio::time::sleep(self.config.retry_delay) => {}
                    _ = self.shutdown_token.cancelled() => return Step::Stop,
                }
            }
        }

        Step::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::sink::SinkError;
    use crate::domain::Message;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::VecDeque;

    /// Sink that replays scripted outcomes, then accepts everything.
    #[derive(Default)]
    struct ScriptedSink {
        script: Mutex<VecDeque<Result<Delivery, SinkError>>>,
        attempts: Mutex<Vec<String>>,
    }

    impl ScriptedSink {
        fn with_script(script: Vec<Result<Delivery, SinkError>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
                attempts: Mutex::new(Vec::new()),
            }
        }

        fn attempts(&self) -> Vec<String> {
            self.attempts.lock().clone()
        }
    }

    #[async_trait]
    impl MessageSink for ScriptedSink {
        async fn deliver(&self, message: &Message) -> Result<Delivery, SinkError> {
            self.attempts.lock().push(message.as_str().to_string());
            self.script
                .lock()
                .pop_front()
                .unwrap_or(Ok(Delivery::Accepted))
        }
    }

    /// Sink whose peer never comes up.
    struct DownSink;

    #[async_trait]
    impl MessageSink for DownSink {
        async fn deliver(&self, _message: &Message) -> Result<Delivery, SinkError> {
            Err(SinkError::Unreachable("connection refused".to_string()))
        }
    }

    fn msg(text: &str) -> Message {
        Message::parse(Some(text)).unwrap()
    }

    fn fast() -> ForwarderConfig {
        ForwarderConfig {
            retry_delay: Duration::from_millis(10),
        }
    }

    async fn drained(queue: &MessageQueue) {
        tokio::time::timeout(Duration::from_secs(2), async {
            while !queue.is_empty() {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("queue should drain");
    }

    #[tokio::test]
    async fn test_forwards_in_insertion_order() {
        let queue = Arc::new(MessageQueue::new());
        let sink = Arc::new(ScriptedSink::default());

        let forwarder = MessageForwarder::new(queue.clone(), sink.clone(), fast());
        let token = forwarder.shutdown_token();
        let handle = forwarder.start();

        queue.push(msg("one"));
        queue.push(msg("two"));
        queue.push(msg("three"));
        drained(&queue).await;

        token.cancel();
        handle.await.unwrap();

        assert_eq!(sink.attempts(), vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_retries_until_peer_accepts() {
        let queue = Arc::new(MessageQueue::new());
        let sink = Arc::new(ScriptedSink::with_script(vec![
            Err(SinkError::Unreachable("connection refused".to_string())),
            Err(SinkError::Transport("reset".to_string())),
        ]));

        queue.push(msg("persistent"));
        queue.push(msg("after"));

        let forwarder = MessageForwarder::new(queue.clone(), sink.clone(), fast());
        let token = forwarder.shutdown_token();
        let handle = forwarder.start();

        drained(&queue).await;
        token.cancel();
        handle.await.unwrap();

        assert_eq!(
            sink.attempts(),
            vec!["persistent", "persistent", "persistent", "after"]
        );
    }

    #[tokio::test]
    async fn test_rejected_message_is_dropped() {
        let queue = Arc::new(MessageQueue::new());
        let sink = Arc::new(ScriptedSink::with_script(vec![Ok(Delivery::Rejected(400))]));

        queue.push(msg("bad"));
        queue.push(msg("good"));

        let forwarder = MessageForwarder::new(queue.clone(), sink.clone(), fast());
        let token = forwarder.shutdown_token();
        let handle = forwarder.start();

        drained(&queue).await;
        token.cancel();
        handle.await.unwrap();

        assert_eq!(sink.attempts(), vec!["bad", "good"]);
    }

    #[tokio::test]
    async fn test_stops_when_idle() {
        let queue = Arc::new(MessageQueue::new());
        let forwarder = MessageForwarder::new(queue, Arc::new(ScriptedSink::default()), fast());
        let token = forwarder.shutdown_token();
        let handle = forwarder.start();

        token.cancel();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("forwarder should stop promptly")
            .unwrap();
    }

    #[tokio::test]
    async fn test_stops_during_retry_backoff_and_keeps_message() {
        let queue = Arc::new(MessageQueue::new());
        queue.push(msg("stuck"));

        let config = ForwarderConfig {
            retry_delay: Duration::from_secs(60),
        };
        let forwarder = MessageForwarder::new(queue.clone(), Arc::new(DownSink), config);
        let token = forwarder.shutdown_token();
        let handle = forwarder.start();

        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("forwarder should not wait out the retry delay")
            .unwrap();

        assert_eq!(queue.peek().unwrap().as_str(), "stuck");
    }

    fn counter_value(snapshot: &[(String, u64)], name: &str) -> u64 {
        snapshot
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value)
            .unwrap_or(0)
    }

    #[test]
    fn test_outcomes_are_counted() {
        use metrics_util::debugging::{DebugValue, DebuggingRecorder};

        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        // Local recorder is thread-bound, so drive everything on this thread.
        metrics::with_local_recorder(&recorder, || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            runtime.block_on(async {
                let queue = Arc::new(MessageQueue::new());
                let sink = Arc::new(ScriptedSink::with_script(vec![
                    Err(SinkError::Unreachable("connection refused".to_string())),
                    Ok(Delivery::Rejected(400)),
                ]));

                queue.push(msg("refused then rejected"));
                queue.push(msg("accepted"));
                queue.push(msg("accepted too"));

                let forwarder = MessageForwarder::new(queue.clone(), sink, fast());
                let token = forwarder.shutdown_token();

                let stop = async {
                    drained(&queue).await;
                    token.cancel();
                };
                tokio::join!(forwarder.run(), stop);
            });
        });

        let counters: Vec<(String, u64)> = snapshotter
            .snapshot()
            .into_vec()
            .into_iter()
            .filter_map(|(key, _, _, value)| match value {
                DebugValue::Counter(n) => Some((key.key().name().to_string(), n)),
                _ => None,
            })
            .collect();

        assert_eq!(counter_value(&counters, FORWARD_RETRIES), 1);
        assert_eq!(counter_value(&counters, MESSAGES_REJECTED), 1);
        assert_eq!(counter_value(&counters, MESSAGES_FORWARDED), 2);
    }
}
