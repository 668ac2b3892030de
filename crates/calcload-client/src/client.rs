// HTTP client for the calculator service

use thiserror::Error;
use url::Url;

use crate::result::{CalculationResult, WireResponse};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid calculator URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed calculator response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the remote calculator service.
///
/// The base URL is parsed once at construction and the underlying
/// `reqwest::Client` (and its connection pool) is reused for every request.
pub struct CalcClient {
    base_url: Url,
    http: reqwest::Client,
}

impl CalcClient {
    /// Create a client for the service at `base_url`.
    ///
    /// An unparseable URL is a startup failure; nothing network-related
    /// happens here.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            http: reqwest::Client::new(),
        })
    }

    /// The configured service URL, without the per-request query.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Evaluate one expression: `GET {base}?expr=<escaped expression>`.
    ///
    /// No retry, no timeout override. Non-2xx statuses fold into
    /// [`ClientError::Transport`]; a body that is not the expected JSON
    /// shape is [`ClientError::Decode`]. Both are recoverable — the caller
    /// decides whether to substitute a zero-value result.
    pub async fn evaluate(&self, expr: &str) -> Result<CalculationResult, ClientError> {
        let url = self.request_url(expr);

        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;

        let wire: WireResponse = serde_json::from_str(&body)?;
        Ok(wire.into())
    }

    // The query is rebuilt from scratch on every request: the configured base
    // URL may carry a dangling `expr=` pair (the original service default),
    // which must not survive into the request. `append_pair` percent-encodes
    // the raw expression exactly once.
    fn request_url(&self, expr: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().clear().append_pair("expr", expr);
        url
    }
}
