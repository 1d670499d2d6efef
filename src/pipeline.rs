use crate::{generator::Generator, publisher::Publisher, Config, Result};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Top-level coordinator: owns the queue, launches the generator and
/// publisher, and waits for both to terminate before returning.
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(self, shutdown: CancellationToken) -> Result<()> {
        info!("pipeline starting");

        let (queue_tx, queue_rx) = mpsc::channel(self.config.pipeline.queue_capacity);

        // Fail before spawning anything if the broker connection cannot be
        // established.
        let publisher = Publisher::new(&self.config.kafka, &self.config.pipeline)?;
        let generator = Generator::new(shutdown.clone());

        let generator_task = tokio::spawn(generator.run(queue_tx));
        let publisher_task = tokio::spawn(publisher.run(queue_rx));

        // The publisher only returns once the queue is closed and drained, so
        // on the normal path the generator is already gone by then. If the
        // publisher fails early, stop the generator before surfacing the
        // error so it does not sit blocked on a full queue.
        let stats = match publisher_task.await? {
            Ok(stats) => stats,
            Err(e) => {
                shutdown.cancel();
                generator_task.await?;
                return Err(e);
            }
        };
        generator_task.await?;

        info!(
            submitted = stats.submitted,
            delivered = stats.delivered,
            failed = stats.failed,
            "pipeline stopped"
        );
        Ok(())
    }
}
