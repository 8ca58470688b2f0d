//! launchdash CLI
//!
//! Offline companion to the dashboard server:
//! - Summarize the launch table
//! - Render both chart snapshots for one site and payload range
//! - Print a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use launchdash::chart::{
    payload_scatter, success_pie, SnapshotWriter, PIE_SNAPSHOT, SCATTER_SNAPSHOT,
};
use launchdash::config::{generate_default_config, Config};
use launchdash::dataset::{load, source_from_config, PayloadRange, SiteSelection, ALL_SITES};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "launchdash-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SpaceX launch records dashboard tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Read the launch table from a local CSV instead of the configured source
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show record counts, sites and payload extrema
    Summary,

    /// Write both chart snapshots without starting the server
    Render {
        /// Launch site, or ALL
        #[arg(short, long, default_value = ALL_SITES)]
        site: String,
        /// Lower payload bound in kg (default: dataset minimum)
        #[arg(long)]
        low: Option<f64>,
        /// Upper payload bound in kg (default: dataset maximum)
        #[arg(long)]
        high: Option<f64>,
        /// Output directory (default: configured output dir)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load_default();
    for failure in &loaded.failures {
        eprintln!("warning: ignoring config file: {}", failure);
    }
    let mut config = loaded.config;
    if let Some(path) = &cli.data {
        config.dataset.path = Some(path.display().to_string());
    }

    match cli.command {
        Commands::Summary => {
            let dataset = load_dataset(&config).await?;
            let summary = dataset.summary();

            println!("Records:   {}", summary.records);
            println!("Successes: {}", summary.successes);
            println!(
                "Payload:   {} kg .. {} kg",
                summary.min_payload, summary.max_payload
            );
            println!();
            println!("{:<16} {:>8} {:>10}", "SITE", "LAUNCHES", "SUCCESSES");
            for site in &summary.sites {
                println!("{:<16} {:>8} {:>10}", site.site, site.launches, site.successes);
            }
        }

        Commands::Render {
            site,
            low,
            high,
            out_dir,
        } => {
            let dataset = load_dataset(&config).await?;
            let site = SiteSelection::from(site);
            let bounds = dataset.payload_bounds();
            let range = PayloadRange::new(low.unwrap_or(bounds.low), high.unwrap_or(bounds.high));

            let writer =
                SnapshotWriter::new(out_dir.unwrap_or_else(|| PathBuf::from(&config.output.dir)));

            let pie = success_pie(&dataset, &site);
            let path = writer
                .persist(PIE_SNAPSHOT, &pie)
                .await
                .context("writing pie snapshot")?;
            println!("{} ({} slices) -> {}", pie.title, pie.mark_count(), path.display());

            let scatter = payload_scatter(&dataset, &site, range);
            let path = writer
                .persist(SCATTER_SNAPSHOT, &scatter)
                .await
                .context("writing scatter snapshot")?;
            println!(
                "{} ({} points in {}) -> {}",
                scatter.title,
                scatter.mark_count(),
                range,
                path.display()
            );
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

async fn load_dataset(config: &Config) -> anyhow::Result<launchdash::Dataset> {
    let source = source_from_config(&config.dataset)?;
    load(source.as_ref()).await.context("loading launch dataset")
}
