use crate::{config::KafkaConfig, Error, Result};
use rdkafka::producer::{DeliveryFuture, FutureProducer, FutureRecord, Producer};
use rdkafka::util::Timeout;
use rdkafka::ClientConfig;
use std::time::Duration;

/// Thin wrapper over the rdkafka [`FutureProducer`].
///
/// Partitioning, batching, acknowledgment, and network I/O are all the
/// client library's responsibility; this type only carries the fixed
/// connection settings and hands delivery futures back to the caller.
pub struct NameProducer {
    producer: FutureProducer,
}

impl NameProducer {
    pub fn new(config: &KafkaConfig) -> Result<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", config.brokers.join(","))
            .set("acks", &config.acks)
            .set("message.timeout.ms", config.message_timeout_ms.to_string())
            .create()
            .map_err(Error::Kafka)?;

        Ok(Self { producer })
    }

    /// Submits a payload to the topic without awaiting delivery.
    ///
    /// The record is keyless, leaving partition assignment to the client
    /// library. The returned future resolves to exactly one delivery report,
    /// bounded by `message.timeout.ms`.
    pub fn send(&self, topic: &str, payload: &str) -> Result<DeliveryFuture> {
        let record = FutureRecord::<(), _>::to(topic).payload(payload);

        self.producer
            .send_result(record)
            .map_err(|(e, _)| Error::Kafka(e))
    }

    /// Blocks until outstanding sends complete or the timeout expires.
    pub fn flush(&self, timeout: Duration) -> Result<()> {
        self.producer
            .flush(Timeout::After(timeout))
            .map_err(Error::Kafka)
    }
}
