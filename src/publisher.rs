//! Publisher task: drains the queue into Kafka and logs delivery outcomes.

use crate::{
    config::{KafkaConfig, PipelineConfig},
    event::NameEvent,
    kafka::{JsonSerializer, NameProducer},
    Result,
};
use futures::channel::oneshot::Canceled;
use rdkafka::producer::future_producer::OwnedDeliveryResult;
use rdkafka::producer::DeliveryFuture;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Counts of delivery outcomes observed by the report loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryTally {
    pub delivered: u64,
    pub failed: u64,
}

impl DeliveryTally {
    pub fn total(&self) -> u64 {
        self.delivered + self.failed
    }
}

/// Totals for one publisher run. Every submitted record is accounted for by
/// exactly one delivery outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishStats {
    pub submitted: u64,
    pub delivered: u64,
    pub failed: u64,
}

/// Drains the event queue, serializes each event, and submits it to the
/// configured topic without waiting for the delivery report inline.
///
/// A concurrent report task logs exactly one outcome per submitted record.
/// Once the queue closes and drains, outstanding sends are flushed with a
/// bounded timeout and the producer is released.
pub struct Publisher {
    producer: NameProducer,
    topic: String,
    flush_timeout: Duration,
}

impl Publisher {
    /// Connects to the broker with the fixed configuration. There is no
    /// retry; a connection that cannot be established ends the process.
    pub fn new(kafka: &KafkaConfig, pipeline: &PipelineConfig) -> Result<Self> {
        let producer = NameProducer::new(kafka)?;

        Ok(Self {
            producer,
            topic: kafka.topic.clone(),
            flush_timeout: Duration::from_secs(pipeline.flush_timeout_secs),
        })
    }

    pub async fn run(self, mut queue: mpsc::Receiver<NameEvent>) -> Result<PublishStats> {
        let Publisher {
            producer,
            topic,
            flush_timeout,
        } = self;

        let (report_tx, report_rx) = mpsc::unbounded_channel();
        let mut reporter = tokio::spawn(drain_reports(topic.clone(), report_rx));

        let mut submitted: u64 = 0;
        let mut fatal = None;
        while let Some(event) = queue.recv().await {
            let payload = match JsonSerializer::serialize(&event) {
                Ok(payload) => payload,
                Err(e) => {
                    // Fatal, but the flush/report shutdown sequence below
                    // still runs so no outcome goes unlogged.
                    fatal = Some(e);
                    break;
                }
            };

            match producer.send(&topic, &payload) {
                Ok(delivery) => {
                    submitted += 1;
                    // The reporter outlives every send; this cannot fail
                    // while the loop is running.
                    let _ = report_tx.send(delivery);
                }
                Err(e) => {
                    // Local enqueue failure (e.g. producer queue full) is a
                    // delivery failure like any other: logged, not retried.
                    error!(error = %e, "failed to submit event to producer");
                }
            }
        }

        info!(submitted, "queue closed and drained, flushing producer");
        drop(report_tx);

        // librdkafka's flush blocks the calling thread, so it runs off the
        // async workers. The producer stays alive until the report loop has
        // drained.
        let flush_task = tokio::task::spawn_blocking(move || {
            let flushed = producer.flush(flush_timeout);
            (producer, flushed)
        });
        let (producer, flushed) = flush_task.await?;
        if let Err(e) = flushed {
            warn!(error = %e, "flush did not complete before timeout");
        }

        // message.timeout.ms bounds every delivery future; the join itself
        // is bounded by the flush timeout.
        let tally = match tokio::time::timeout(flush_timeout, &mut reporter).await {
            Ok(joined) => joined?,
            Err(_) => {
                warn!("report loop did not finish before timeout");
                reporter.abort();
                DeliveryTally::default()
            }
        };
        drop(producer);

        match fatal {
            Some(e) => Err(e),
            None => Ok(PublishStats {
                submitted,
                delivered: tally.delivered,
                failed: tally.failed,
            }),
        }
    }
}

/// Logs one outcome for a single resolved delivery report and counts it.
fn record_outcome(
    topic: &str,
    outcome: std::result::Result<OwnedDeliveryResult, Canceled>,
    tally: &mut DeliveryTally,
) {
    match outcome {
        Ok(Ok((partition, offset))) => {
            tally.delivered += 1;
            info!(topic, partition, offset, "message delivered");
        }
        Ok(Err((e, _message))) => {
            tally.failed += 1;
            error!(topic, error = %e, "delivery failed");
        }
        Err(Canceled) => {
            // Producer dropped before resolving the report.
            tally.failed += 1;
            error!(topic, "delivery report canceled");
        }
    }
}

/// Drains delivery reports, logging one outcome per submitted record.
///
/// Fire-and-forget observability, not control flow: failures are never
/// retried or surfaced to the caller.
async fn drain_reports(
    topic: String,
    mut reports: mpsc::UnboundedReceiver<DeliveryFuture>,
) -> DeliveryTally {
    let mut tally = DeliveryTally::default();

    while let Some(report) = reports.recv().await {
        record_outcome(&topic, report.await, &mut tally);
    }

    info!(
        delivered = tally.delivered,
        failed = tally.failed,
        "report loop finished"
    );
    tally
}
