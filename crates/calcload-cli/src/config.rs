// Environment-sourced configuration

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Calculator service base URL
    pub calculator_url: Option<String>,
    /// Generated expression length
    pub expression_length: Option<u8>,
    /// Worker pool size
    pub worker_pool_size: Option<usize>,
}

impl Config {
    /// Create configuration from environment variables.
    ///
    /// Unset or unparseable values fall back to the defaults exposed by the
    /// accessor methods.
    pub fn from_env() -> Self {
        Self {
            calculator_url: std::env::var("CALCULATOR_URL").ok(),
            expression_length: std::env::var("ExpressionLength")
                .ok()
                .and_then(|v| v.parse().ok()),
            worker_pool_size: std::env::var("WorkerPoolSize")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Get calculator URL with default
    pub fn calculator_url(&self) -> String {
        self.calculator_url
            .clone()
            .unwrap_or_else(|| "http://localhost:8080/?expr=".to_string())
    }

    /// Get expression length with default
    pub fn expression_length(&self) -> u8 {
        self.expression_length.unwrap_or(10)
    }

    /// Get worker pool size with default
    pub fn worker_pool_size(&self) -> usize {
        self.worker_pool_size.unwrap_or(20)
    }
}
