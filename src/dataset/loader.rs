//! Dataset Loader
//!
//! Fetches the launch CSV from a [`DatasetSource`] and parses it into a
//! [`Dataset`]. The load happens once, before the server binds; any error
//! here aborts startup.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::{DatasetError, DatasetResult};
use super::table::Dataset;
use super::types::{LaunchRecord, Outcome};
use crate::config::DatasetConfig;

/// Columns every source file must carry
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

/// Where the raw CSV text comes from
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human-readable location for logs
    fn describe(&self) -> String;

    /// Read the full CSV body
    async fn fetch(&self) -> DatasetResult<String>;
}

/// CSV served over HTTP(S)
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> DatasetResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> DatasetResult<String> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DatasetError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// CSV on the local filesystem
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> DatasetResult<String> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

/// Pick the source named by the configuration
///
/// A local `path` wins over the remote `url`.
pub fn source_from_config(config: &DatasetConfig) -> DatasetResult<Box<dyn DatasetSource>> {
    match &config.path {
        Some(path) => Ok(Box::new(FileSource::new(path))),
        None => Ok(Box::new(HttpSource::new(
            config.url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )?)),
    }
}

/// Fetch and parse the launch table
pub async fn load(source: &dyn DatasetSource) -> DatasetResult<Dataset> {
    let location = source.describe();
    tracing::info!(source = %location, "Fetching launch dataset");

    let body = source.fetch().await?;
    let dataset = parse_csv(&body)?;

    tracing::info!(
        source = %location,
        records = dataset.len(),
        sites = dataset.sites().len(),
        min_payload = dataset.min_payload(),
        max_payload = dataset.max_payload(),
        "Launch dataset loaded"
    );

    Ok(dataset)
}

/// Row as it appears in the CSV, before validation
#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
    #[serde(rename = "Flight Number", default)]
    flight_number: Option<u32>,
    #[serde(rename = "Booster Version", default)]
    booster_version: Option<String>,
}

impl RawLaunchRow {
    fn validate(self) -> Result<LaunchRecord, String> {
        if self.launch_site.is_empty() {
            return Err("launch site is empty".to_string());
        }
        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(format!(
                "payload mass must be a non-negative number, got {}",
                self.payload_mass_kg
            ));
        }
        let outcome = Outcome::try_from(self.class)?;

        Ok(LaunchRecord {
            launch_site: self.launch_site,
            payload_mass_kg: self.payload_mass_kg,
            outcome,
            booster_version_category: self.booster_version_category,
            flight_number: self.flight_number,
            booster_version: self.booster_version.filter(|v| !v.is_empty()),
        })
    }
}

/// Parse CSV text into a dataset
///
/// Extra columns are ignored. The first bad row aborts the parse.
pub fn parse_csv(body: &str) -> DatasetResult<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::InvalidRecord {
                line: 1,
                reason: format!("missing column `{}`", column),
            });
        }
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        let raw: RawLaunchRow =
            row.deserialize(Some(&headers))
                .map_err(|e| DatasetError::InvalidRecord {
                    line,
                    reason: e.to_string(),
                })?;

        let record = raw
            .validate()
            .map_err(|reason| DatasetError::InvalidRecord { line, reason })?;
        records.push(record);
    }

    tracing::debug!(rows = records.len(), "Parsed launch CSV");
    Dataset::from_records(records)
}
