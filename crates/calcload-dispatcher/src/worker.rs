// Survey worker: evaluates jobs against the calculator service

use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;

use async_channel::{Receiver, Sender};
use calcload_client::{CalcClient, CalculationResult};
use rand::Rng;
use tracing::{debug, info, warn};

/// Pull jobs until the `jobs` queue is closed and drained, evaluating each
/// against the calculator service.
///
/// Transport and decode failures are absorbed here: logged with context and
/// resolved to the zero-value result so flow control downstream is never
/// disturbed by a single bad job. The worker never observes the cancellation
/// signal; a job mid-HTTP-call at cancellation time finishes that call.
pub(crate) async fn run_worker(
    id: usize,
    jobs: Receiver<String>,
    results: Sender<CalculationResult>,
    client: Arc<CalcClient>,
    pacing: Option<Range<u64>>,
) {
    while let Ok(job) = jobs.recv().await {
        let result = match client.evaluate(&job).await {
            Ok(result) => result,
            Err(err) => {
                warn!(
                    worker = id,
                    url = %client.base_url(),
                    expr = %job,
                    error = %err,
                    "evaluation failed, substituting zero result"
                );
                CalculationResult::zero(job)
            }
        };

        if let Some(range) = &pacing {
            let delay = Duration::from_millis(rand::thread_rng().gen_range(range.clone()));
            tokio::time::sleep(delay).await;
        }

        info!(
            worker = id,
            expr = %result.expr,
            value = result.value,
            "survey calculated"
        );

        // may block while the results queue is full; the wait is bounded by
        // the pool size
        if results.send(result).await.is_err() {
            break;
        }
    }

    debug!(worker = id, "jobs queue closed and drained, worker exiting");
}
