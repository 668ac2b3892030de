// Calculator Service Client
//
// This crate provides the HTTP client for the remote calculator service.
// One request per expression, no retries, no caching; transport and decode
// failures are returned as values for the caller to absorb.

mod client;
mod result;

pub use client::{CalcClient, ClientError};
pub use result::{CalculationResult, RemoteError};
