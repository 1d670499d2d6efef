//! Error types and result handling for name-stream.
//!
//! This module defines the main error type [`Error`] and a convenience
//! [`Result`] type alias used throughout the crate.

use thiserror::Error;

/// The main error type for name-stream operations.
///
/// This enum represents the failures that can end the pipeline: producer
/// construction, event serialization, and task join failures. Per-message
/// delivery failures are logged by the report loop and never surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// Kafka client or producer error.
    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    /// JSON serialization error when encoding events.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A spawned pipeline task panicked or was aborted.
    #[error("Task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// A convenient Result type alias for name-stream operations.
///
/// This is equivalent to `std::result::Result<T, name_stream::Error>`.
pub type Result<T> = std::result::Result<T, Error>;
