//! Launch Dataset
//!
//! Loads the SpaceX launch table once at startup and keeps it as an
//! immutable value.
//!
//! ## Components
//!
//! - **Types**: `LaunchRecord`, `Outcome`, `SiteSelection`, `PayloadRange`
//! - **Table**: `Dataset`, the loaded rows with payload extrema and site list
//! - **Loader**: `DatasetSource` implementations and the CSV parser

mod error;
mod loader;
mod table;
mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::{
    load, parse_csv, source_from_config, DatasetSource, FileSource, HttpSource, REQUIRED_COLUMNS,
};
pub use table::{Dataset, DatasetSummary, SiteSummary};
pub use types::{LaunchRecord, Outcome, PayloadRange, SiteSelection, ALL_SITES};
