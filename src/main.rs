//! launchdash server
//!
//! Run with: cargo run --bin launchdash
//!
//! Loads the launch table, then serves the dashboard on
//! `http://127.0.0.1:8050`. Runs with no flags and no environment; see
//! [`launchdash::config`] for the optional config file and
//! `LAUNCHDASH_*` overrides.

use anyhow::Context;
use launchdash::api::{serve, AppState};
use launchdash::chart::SnapshotWriter;
use launchdash::config::{Config, LoggingConfig};
use launchdash::dataset::{load, source_from_config};
use launchdash::layout::describe_bounds;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = Config::load_default();
    init_tracing(&loaded.config.logging);

    tracing::info!("Starting launchdash v{}", env!("CARGO_PKG_VERSION"));
    loaded.report();
    let config = loaded.config;

    // A failed load is fatal: nothing is served without the table
    let source = source_from_config(&config.dataset).context("configuring dataset source")?;
    let dataset = load(source.as_ref())
        .await
        .context("loading launch dataset")?;

    tracing::info!(
        "Payload range {} across {} sites",
        describe_bounds(dataset.min_payload(), dataset.max_payload()),
        dataset.sites().len()
    );

    let mut state = AppState::new(Arc::new(dataset));
    if config.output.write_snapshots {
        let writer = SnapshotWriter::new(&config.output.dir);
        tracing::info!("Chart snapshots will be written to {:?}", writer.dir());
        state = state.with_snapshots(writer);
    } else {
        tracing::info!("Chart snapshots disabled");
    }

    serve(state, &config.server)
        .await
        .context("running dashboard server")?;

    tracing::info!("launchdash stopped");
    Ok(())
}

/// Install the global subscriber; `RUST_LOG` wins over the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("launchdash={},tower_http=info", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
