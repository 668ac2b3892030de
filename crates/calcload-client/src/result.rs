// Wire schema and result types for the calculator service

use serde::Deserialize;
use thiserror::Error;

/// Raw response body: `{"result": <integer>, "error": <string, possibly
/// empty>, "expr": <string, echoed input>}`. Any other shape is a decode
/// failure.
#[derive(Debug, Deserialize)]
pub(crate) struct WireResponse {
    pub result: i64,
    pub error: String,
    pub expr: String,
}

/// Error reported by the calculator service itself (e.g. division by zero).
///
/// Carried over the wire as a plain string; an empty string means no error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("calculator error: {message}")]
pub struct RemoteError {
    pub message: String,
}

/// Outcome of one evaluated expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationResult {
    /// Computed value; 0 when the service reported an error.
    pub value: i64,
    /// Error reported by the service, if any.
    pub error: Option<RemoteError>,
    /// The expression this result belongs to.
    pub expr: String,
}

impl CalculationResult {
    /// Zero-value result for an expression whose evaluation failed locally
    /// (transport or decode). Keeps the pipeline's flow control intact.
    pub fn zero(expr: impl Into<String>) -> Self {
        Self {
            value: 0,
            error: None,
            expr: expr.into(),
        }
    }
}

impl From<WireResponse> for CalculationResult {
    fn from(wire: WireResponse) -> Self {
        let error = if wire.error.is_empty() {
            None
        } else {
            Some(RemoteError {
                message: wire.error,
            })
        };

        Self {
            value: wire.result,
            error,
            expr: wire.expr,
        }
    }
}
