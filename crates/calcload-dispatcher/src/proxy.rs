// Dispatcher proxy: forwards surveys to jobs, owns queue shutdown

use async_channel::{Receiver, Sender};
use tokio::sync::watch;
use tracing::{debug, info};

/// Forward surveys onto the `jobs` queue until cancellation fires or the
/// producers are done.
///
/// The proxy is the sole owner of the `surveys` receiver and the `jobs`
/// sender, and the only component that closes either queue. `close()` is
/// idempotent, so repeated cancellation triggers cannot double-close. Once
/// the cancellation branch runs, the loop never resumes; workers observe
/// shutdown indirectly, by draining the closed `jobs` queue.
pub(crate) async fn run_proxy(
    surveys: Receiver<String>,
    jobs: Sender<String>,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        tokio::select! {
            survey = surveys.recv() => match survey {
                Ok(survey) => {
                    // may block while the jobs queue is full; the pending
                    // send completes before cancellation is looked at again
                    if jobs.send(survey).await.is_err() {
                        break;
                    }
                }
                Err(_) => {
                    debug!("all surveys produced and forwarded, closing jobs queue");
                    jobs.close();
                    break;
                }
            },
            _ = shutdown.changed() => {
                info!("cancellation received, closing jobs and surveys queues");
                jobs.close();
                surveys.close();
                break;
            }
        }
    }
}
