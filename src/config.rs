use serde::{Deserialize, Serialize};

/// Pipeline configuration, passed explicitly to the tasks that need it.
///
/// All values are compiled-in defaults; there is no configuration file and
/// no tuning flags on the binary.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub kafka: KafkaConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KafkaConfig {
    #[serde(default = "default_brokers")]
    pub brokers: Vec<String>,
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default = "default_acks")]
    pub acks: String,
    /// Upper bound on how long a single send may stay unacknowledged before
    /// its delivery report resolves as failed.
    #[serde(default = "default_message_timeout_ms")]
    pub message_timeout_ms: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
    #[serde(default = "default_flush_timeout_secs")]
    pub flush_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kafka: KafkaConfig::default(),
            pipeline: PipelineConfig::default(),
        }
    }
}

impl Default for KafkaConfig {
    fn default() -> Self {
        Self {
            brokers: default_brokers(),
            topic: default_topic(),
            acks: default_acks(),
            message_timeout_ms: default_message_timeout_ms(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            queue_capacity: default_queue_capacity(),
            flush_timeout_secs: default_flush_timeout_secs(),
        }
    }
}

fn default_brokers() -> Vec<String> {
    vec!["localhost:19092".to_string()]
}

fn default_topic() -> String {
    "name_stream".to_string()
}

fn default_acks() -> String {
    "all".to_string()
}

fn default_message_timeout_ms() -> u32 {
    10_000
}

fn default_queue_capacity() -> usize {
    50_000
}

fn default_flush_timeout_secs() -> u64 {
    15
}
