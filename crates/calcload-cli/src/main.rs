// calcload: concurrent calculator exercise client
//
// Linear startup/shutdown protocol: read config, launch the pipeline, report
// the initial batch of results, block for a termination signal, cancel, and
// wait for every worker to drain.

mod config;

use anyhow::{Context, Result};
use calcload_client::CalcClient;
use calcload_dispatcher::{Dispatcher, DispatcherConfig};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "calcload_cli=debug,calcload_dispatcher=debug,calcload_client=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load (if present) values from .env in the current path
    if dotenvy::dotenv().is_err() {
        tracing::debug!("no .env file found, using process environment only");
    }

    tracing::info!("calcload starting, let's calculate some expressions");

    let config = Config::from_env();
    tracing::info!(
        url = %config.calculator_url(),
        pool_size = config.worker_pool_size(),
        expression_length = config.expression_length(),
        "configuration loaded"
    );

    // Any failure up to here is fatal: no part of the pipeline has started
    let client = CalcClient::new(&config.calculator_url())
        .context("failed to construct calculator client")?;

    let dispatcher_config = DispatcherConfig::default()
        .with_pool_size(config.worker_pool_size())
        .with_expression_length(config.expression_length());
    let mut dispatcher = Dispatcher::start(dispatcher_config, client);

    // Initial report: one result per launched producer
    let results = dispatcher.results();
    for number in 0..dispatcher.pool_size() {
        match results.recv().await {
            Ok(result) => tracing::info!(
                number,
                expr = %result.expr,
                value = result.value,
                error = ?result.error,
                "reading results queue"
            ),
            Err(_) => break,
        }
    }

    shutdown_signal().await;

    tracing::info!("shutdown signal received, cancelling the pipeline");
    dispatcher.shutdown();
    dispatcher.join().await;
    tracing::info!("all workers done their job, shutting down, bye");

    Ok(())
}

/// Resolve on SIGINT or SIGTERM (ctrl-c only on non-unix targets).
async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C"),
        () = terminate => tracing::info!("received SIGTERM"),
    }
}
