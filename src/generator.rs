//! Generator task: synthesizes name events into the bounded queue.

use crate::event::NameEvent;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Produces [`NameEvent`]s indefinitely until cancelled.
///
/// Backpressure is the queue capacity alone: when the queue is full the send
/// suspends, and generation resumes once the publisher drains. Dropping the
/// sender on exit closes the queue, signaling end-of-stream to the publisher.
pub struct Generator {
    shutdown: CancellationToken,
}

impl Generator {
    pub fn new(shutdown: CancellationToken) -> Self {
        Self { shutdown }
    }

    pub async fn run(self, queue: mpsc::Sender<NameEvent>) {
        let mut generated: u64 = 0;

        loop {
            let event = NameEvent::random();
            debug!(first_name = %event.first_name, last_name = %event.last_name, "generated event");

            tokio::select! {
                biased;

                _ = self.shutdown.cancelled() => break,
                sent = queue.send(event) => {
                    if sent.is_err() {
                        // Receiver dropped; nothing left to generate for.
                        break;
                    }
                    generated += 1;
                }
            }
        }

        info!(generated, "generator stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_cancellation_closes_queue() {
        let (tx, mut rx) = mpsc::channel(8);
        let shutdown = CancellationToken::new();

        let handle = tokio::spawn(Generator::new(shutdown.clone()).run(tx));

        // Let it produce at least one event, then cancel.
        let first = rx.recv().await;
        assert!(first.is_some());

        shutdown.cancel();
        handle.await.unwrap();

        // Drain whatever was buffered; the queue must then report closure.
        while let Some(event) = rx.recv().await {
            assert!(!event.first_name.is_empty());
            assert!(!event.last_name.is_empty());
        }
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_queue_never_exceeds_capacity() {
        let capacity = 4;
        let (tx, mut rx) = mpsc::channel(capacity);
        let shutdown = CancellationToken::new();

        let handle = tokio::spawn(Generator::new(shutdown.clone()).run(tx));

        // Give the generator time to fill the queue and block on it.
        tokio::time::sleep(Duration::from_millis(50)).await;

        shutdown.cancel();
        handle.await.unwrap();

        let mut drained = 0;
        while rx.recv().await.is_some() {
            drained += 1;
        }
        assert!(drained <= capacity, "queue held {drained} events, capacity {capacity}");
        assert!(drained > 0);
    }

    #[tokio::test]
    async fn test_receiver_drop_stops_generator() {
        let (tx, rx) = mpsc::channel(2);
        let shutdown = CancellationToken::new();

        let handle = tokio::spawn(Generator::new(shutdown).run(tx));
        drop(rx);

        // Must terminate without cancellation once the queue is gone.
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .unwrap()
            .unwrap();
    }
}
