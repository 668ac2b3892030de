// One-shot survey producer

use async_channel::Sender;
use tracing::debug;

/// Generate exactly one expression and submit it to the `surveys` queue.
///
/// One producer is spawned per pool slot, so the total number of surveys
/// equals the configured pool size. A send against queues already closed by
/// cancellation is tolerated in-flight loss, not an error.
pub(crate) async fn produce_survey(surveys: Sender<String>, length: u8) {
    let expression = calcload_exprgen::generate(length);
    debug!(expr = %expression, "survey generated");

    if surveys.send(expression).await.is_err() {
        debug!("surveys queue closed before the survey was submitted");
    }
}
