// Pipeline assembly: queues, producers, proxy, workers, shutdown

use std::ops::Range;
use std::sync::Arc;

use async_channel::Receiver;
use calcload_client::{CalcClient, CalculationResult};
use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{error, info};

use crate::{producer, proxy, worker};

/// Dispatcher configuration.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Number of workers, and with it the producer count, the total job
    /// count and the capacity of every queue.
    pub pool_size: usize,

    /// Approximate character length of generated expressions.
    pub expression_length: u8,

    /// Per-job pacing delay in milliseconds, sampled uniformly after the
    /// HTTP call and before the result is emitted. `None` disables pacing.
    pub pacing: Option<Range<u64>>,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            pool_size: 20,
            expression_length: 10,
            pacing: Some(1000..3000),
        }
    }
}

impl DispatcherConfig {
    /// Set the pool size (clamped to at least 1).
    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size.max(1);
        self
    }

    /// Set the generated expression length.
    pub fn with_expression_length(mut self, length: u8) -> Self {
        self.expression_length = length;
        self
    }

    /// Set the pacing delay range in milliseconds.
    pub fn with_pacing(mut self, pacing: Range<u64>) -> Self {
        self.pacing = Some(pacing);
        self
    }

    /// Disable the pacing delay entirely.
    pub fn without_pacing(mut self) -> Self {
        self.pacing = None;
        self
    }
}

/// A running producer → proxy → worker pipeline.
///
/// Created with [`Dispatcher::start`], which wires the three bounded queues
/// and spawns every stage. The handle retained here exposes exactly what the
/// orchestrator is allowed to touch: the `results` queue, the one-shot
/// cancellation trigger, and the completion barrier.
pub struct Dispatcher {
    pool_size: usize,
    results_rx: Receiver<CalculationResult>,
    shutdown_tx: watch::Sender<bool>,
    workers: JoinSet<()>,
    proxy: Option<JoinHandle<()>>,
}

impl Dispatcher {
    /// Wire the queues and launch the pipeline.
    ///
    /// Spawns `pool_size` one-shot producers, the proxy, and `pool_size`
    /// workers. All three queues are bounded to `pool_size`, so every
    /// producer can submit without blocking and no stage can stall another
    /// under normal operation.
    pub fn start(config: DispatcherConfig, client: CalcClient) -> Self {
        let pool_size = config.pool_size.max(1);

        let (surveys_tx, surveys_rx) = async_channel::bounded::<String>(pool_size);
        let (jobs_tx, jobs_rx) = async_channel::bounded::<String>(pool_size);
        let (results_tx, results_rx) = async_channel::bounded::<CalculationResult>(pool_size);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        info!(
            pool_size,
            expression_length = config.expression_length,
            url = %client.base_url(),
            "starting dispatcher pipeline"
        );

        for _ in 0..pool_size {
            tokio::spawn(producer::produce_survey(
                surveys_tx.clone(),
                config.expression_length,
            ));
        }
        // producers hold the only remaining surveys senders; once all have
        // submitted, the queue reports closed-and-drained to the proxy
        drop(surveys_tx);

        let proxy = tokio::spawn(proxy::run_proxy(surveys_rx, jobs_tx, shutdown_rx));

        let client = Arc::new(client);
        let mut workers = JoinSet::new();
        for id in 0..pool_size {
            workers.spawn(worker::run_worker(
                id,
                jobs_rx.clone(),
                results_tx.clone(),
                Arc::clone(&client),
                config.pacing.clone(),
            ));
        }
        // workers hold the only results senders; the results queue closes
        // when the last worker exits
        drop(jobs_rx);
        drop(results_tx);

        Self {
            pool_size,
            results_rx,
            shutdown_tx,
            workers,
            proxy: Some(proxy),
        }
    }

    /// Number of workers (== producers == total jobs).
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Receiver for calculated results. Reports closed once every worker has
    /// exited and the buffered results are drained.
    pub fn results(&self) -> Receiver<CalculationResult> {
        self.results_rx.clone()
    }

    /// Trigger cancellation. One-shot and idempotent: repeated calls, or a
    /// call after the pipeline already drained naturally, are no-ops.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Completion barrier: resolves once every worker and the proxy have
    /// exited. In-flight HTTP calls run to completion; nothing is aborted.
    pub async fn join(&mut self) {
        while let Some(joined) = self.workers.join_next().await {
            if let Err(err) = joined {
                error!(error = %err, "worker task failed");
            }
        }

        if let Some(proxy) = self.proxy.take() {
            if let Err(err) = proxy.await {
                error!(error = %err, "proxy task failed");
            }
        }

        info!("all workers done, pipeline drained");
    }
}
