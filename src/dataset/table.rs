//! In-memory launch table
//!
//! Built once at startup and shared read-only behind an `Arc`. Extrema and
//! the distinct site list are computed at construction time.

use serde::Serialize;
use std::collections::BTreeSet;

use super::error::{DatasetError, DatasetResult};
use super::types::{LaunchRecord, PayloadRange, SiteSelection};

/// Immutable collection of launch records plus derived statistics
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
    sites: Vec<String>,
}

/// Compact description of a loaded dataset
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatasetSummary {
    pub records: usize,
    pub successes: usize,
    pub sites: Vec<SiteSummary>,
    pub min_payload: f64,
    pub max_payload: f64,
}

/// Per-site launch counts
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteSummary {
    pub site: String,
    pub launches: usize,
    pub successes: usize,
}

impl Dataset {
    /// Build a dataset from parsed records
    ///
    /// Fails with [`DatasetError::Empty`] when there are no records.
    pub fn from_records(records: Vec<LaunchRecord>) -> DatasetResult<Self> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let min_payload = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::INFINITY, f64::min);
        let max_payload = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::NEG_INFINITY, f64::max);

        let sites = records
            .iter()
            .map(|r| r.launch_site.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Ok(Self {
            records,
            min_payload,
            max_payload,
            sites,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest payload mass in the table
    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    /// Largest payload mass in the table
    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Full payload span, the slider's bounds and default value
    pub fn payload_bounds(&self) -> PayloadRange {
        PayloadRange::new(self.min_payload, self.max_payload)
    }

    /// Distinct launch sites, sorted
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Records belonging to the selection, in table order
    pub fn select<'a>(
        &'a self,
        selection: &'a SiteSelection,
    ) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
        self.records.iter().filter(move |r| r.matches_site(selection))
    }

    /// Number of launches from one site
    pub fn site_count(&self, site: &str) -> usize {
        self.records.iter().filter(|r| r.launch_site == site).count()
    }

    pub fn summary(&self) -> DatasetSummary {
        let sites = self
            .sites
            .iter()
            .map(|site| {
                let (launches, successes) = self
                    .records
                    .iter()
                    .filter(|r| r.launch_site == *site)
                    .fold((0, 0), |(n, ok), r| {
                        (n + 1, ok + usize::from(r.outcome.is_success()))
                    });
                SiteSummary {
                    site: site.clone(),
                    launches,
                    successes,
                }
            })
            .collect();

        DatasetSummary {
            records: self.records.len(),
            successes: self
                .records
                .iter()
                .filter(|r| r.outcome.is_success())
                .count(),
            sites,
            min_payload: self.min_payload,
            max_payload: self.max_payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::types::Outcome;

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("KSC LC-39A", 2500.0, Outcome::Success, "FT"),
            LaunchRecord::new("CCAFS LC-40", 0.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 9600.0, Outcome::Failure, "B5"),
            LaunchRecord::new("CCAFS LC-40", 525.0, Outcome::Success, "v1.0"),
        ])
        .unwrap()
    }

    #[test]
    fn test_extrema() {
        let dataset = sample();
        assert_eq!(dataset.min_payload(), 0.0);
        assert_eq!(dataset.max_payload(), 9600.0);
        assert_eq!(dataset.payload_bounds(), PayloadRange::new(0.0, 9600.0));
    }

    #[test]
    fn test_sites_sorted_and_distinct() {
        let dataset = sample();
        assert_eq!(dataset.sites(), ["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(dataset.site_count("KSC LC-39A"), 2);
        assert_eq!(dataset.site_count("VAFB SLC-4E"), 0);
    }

    #[test]
    fn test_empty_is_rejected() {
        assert!(matches!(
            Dataset::from_records(Vec::new()),
            Err(DatasetError::Empty)
        ));
    }

    #[test]
    fn test_select_keeps_table_order() {
        let dataset = sample();
        let site = SiteSelection::site("CCAFS LC-40");
        let payloads: Vec<f64> = dataset.select(&site).map(|r| r.payload_mass_kg).collect();
        assert_eq!(payloads, vec![0.0, 525.0]);
        assert_eq!(dataset.select(&SiteSelection::All).count(), 4);
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert_eq!(summary.records, 4);
        assert_eq!(summary.successes, 2);
        assert_eq!(
            summary.sites[1],
            SiteSummary {
                site: "KSC LC-39A".to_string(),
                launches: 2,
                successes: 1,
            }
        );
    }
}
