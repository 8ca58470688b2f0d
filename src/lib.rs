//! # launchdash
//!
//! SpaceX launch records dashboard: a site dropdown driving a launch-outcome
//! pie chart, and a payload range slider driving a payload versus success
//! scatter chart, served over HTTP from a CSV loaded once at startup.
//!
//! ## Modules
//!
//! - [`dataset`]: Launch table loading and the immutable [`Dataset`]
//! - [`chart`]: The two chart callbacks, Plotly rendering, snapshot files
//! - [`layout`]: Widget tree and dashboard page
//! - [`dashboard`]: Callback registration table and dispatch
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launchdash::chart::{payload_scatter, success_pie};
//! use launchdash::dataset::{load, FileSource, SiteSelection};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = load(&FileSource::new("spacex_launch_dash.csv")).await?;
//!
//!     let pie = success_pie(&dataset, &SiteSelection::site("KSC LC-39A"));
//!     println!("{}: {:?}", pie.title, pie.data);
//!
//!     let scatter = payload_scatter(&dataset, &SiteSelection::All, dataset.payload_bounds());
//!     println!("{} points", scatter.mark_count());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod layout;

// Re-export top-level types for convenience
pub use dataset::{
    Dataset, DatasetError, DatasetResult, LaunchRecord, Outcome, PayloadRange, SiteSelection,
};

pub use chart::{ChartData, ChartKind, ChartSpec, Figure, RenderError, SnapshotWriter};

pub use dashboard::{CallbackError, CallbackInputs, CallbackRegistry};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{
    Config, ConfigError, ConfigLoad, DatasetConfig, LoggingConfig, OutputConfig, ServerConfig,
};
