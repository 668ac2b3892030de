// Worker-Pool Dispatcher
//
// Three-stage pipeline: one-shot producers feed the `surveys` queue, a
// cancellation-aware proxy forwards surveys to the `jobs` queue, and a fixed
// pool of workers evaluates each job against the calculator service and
// emits onto the `results` queue.
//
// Ownership discipline (the correctness backbone):
// - producers hold the only `surveys` senders;
// - the proxy holds the only `surveys` receiver and the only `jobs` sender,
//   and is the sole closer of both queues;
// - workers hold `jobs` receiver clones and the only `results` senders;
// - the orchestrator reads `results` and owns the cancellation sender.

mod dispatcher;
mod producer;
mod proxy;
mod worker;

pub use dispatcher::{Dispatcher, DispatcherConfig};
