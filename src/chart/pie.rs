//! Launch outcome pie chart
//!
//! Driven by the site dropdown alone.

use super::spec::ChartSpec;
use crate::dataset::{Dataset, Outcome, SiteSelection};

pub const ALL_SITES_TITLE: &str = "Total Successful Launches by Site";

/// Build the pie chart for a site selection
///
/// With every site selected, one slice per site counting its launches,
/// largest first (ties keep table order). With one site selected, a
/// `Success` slice and a `Failed` slice in that order; an outcome with no
/// launches gets no slice, so an unknown site yields an empty chart.
pub fn success_pie(dataset: &Dataset, site: &SiteSelection) -> ChartSpec {
    match site {
        SiteSelection::All => {
            let mut counts: Vec<(String, u64)> = Vec::new();
            for record in dataset.records() {
                match counts.iter_mut().find(|(s, _)| *s == record.launch_site) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((record.launch_site.clone(), 1)),
                }
            }
            // stable, so equal counts stay in first-appearance order
            counts.sort_by(|a, b| b.1.cmp(&a.1));

            let (labels, values): (Vec<String>, Vec<u64>) = counts.into_iter().unzip();
            ChartSpec::pie(ALL_SITES_TITLE, labels, values)
        }
        SiteSelection::Site(name) => {
            let (successes, failures) =
                dataset
                    .select(site)
                    .fold((0u64, 0u64), |(ok, failed), r| match r.outcome {
                        Outcome::Success => (ok + 1, failed),
                        Outcome::Failure => (ok, failed + 1),
                    });

            let mut labels = Vec::with_capacity(2);
            let mut values = Vec::with_capacity(2);
            for (label, count) in [("Success", successes), ("Failed", failures)] {
                if count > 0 {
                    labels.push(label.to_string());
                    values.push(count);
                }
            }

            ChartSpec::pie(format!("Success vs. Failed for {}", name), labels, values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::spec::ChartData;
    use crate::dataset::fixtures;
    use crate::dataset::LaunchRecord;

    fn pie_parts(spec: &ChartSpec) -> (&[String], &[u64]) {
        match &spec.data {
            ChartData::Pie { labels, values } => (labels, values),
            other => panic!("expected pie, got {:?}", other),
        }
    }

    #[test]
    fn test_all_sites_one_slice_per_site() {
        let dataset = fixtures::dataset();
        let spec = success_pie(&dataset, &SiteSelection::All);
        let (labels, values) = pie_parts(&spec);

        assert_eq!(spec.title, ALL_SITES_TITLE);
        assert_eq!(labels.len(), dataset.sites().len());
        for (label, value) in labels.iter().zip(values) {
            assert_eq!(*value as usize, dataset.site_count(label));
        }
        assert_eq!(values.iter().sum::<u64>() as usize, dataset.len());
    }

    #[test]
    fn test_all_sites_ordered_by_count() {
        let dataset = fixtures::dataset();
        let spec = success_pie(&dataset, &SiteSelection::All);
        let (labels, values) = pie_parts(&spec);

        assert_eq!(labels[0], "CCAFS LC-40");
        assert_eq!(values[0], 7);
        assert_eq!(labels[1], "KSC LC-39A");
        // VAFB and CCAFS SLC-40 tie at 2; VAFB appears first in the table
        assert_eq!(labels[2], "VAFB SLC-4E");
        assert_eq!(labels[3], "CCAFS SLC-40");
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_each_site_sums_to_site_count() {
        let dataset = fixtures::dataset();
        for site in dataset.sites() {
            let spec = success_pie(&dataset, &SiteSelection::site(site.as_str()));
            let (_, values) = pie_parts(&spec);
            assert_eq!(values.iter().sum::<u64>() as usize, dataset.site_count(site));
        }
    }

    #[test]
    fn test_success_failed_counts() {
        let mut records = Vec::new();
        for _ in 0..2 {
            records.push(LaunchRecord::new("KSC LC-39A", 1000.0, Outcome::Success, "FT"));
        }
        for _ in 0..3 {
            records.push(LaunchRecord::new("KSC LC-39A", 2000.0, Outcome::Failure, "FT"));
        }
        records.push(LaunchRecord::new("VAFB SLC-4E", 500.0, Outcome::Success, "v1.1"));
        let dataset = Dataset::from_records(records).unwrap();

        let spec = success_pie(&dataset, &SiteSelection::site("KSC LC-39A"));
        let (labels, values) = pie_parts(&spec);

        assert_eq!(labels, ["Success", "Failed"]);
        assert_eq!(values, [2, 3]);
        assert_eq!(spec.title, "Success vs. Failed for KSC LC-39A");
    }

    #[test]
    fn test_unknown_site_is_empty() {
        let dataset = fixtures::dataset();
        let spec = success_pie(&dataset, &SiteSelection::site("Boca Chica"));
        assert!(spec.is_empty());
        assert_eq!(spec.title, "Success vs. Failed for Boca Chica");
    }

    #[test]
    fn test_idempotent() {
        let dataset = fixtures::dataset();
        let site = SiteSelection::site("CCAFS LC-40");
        assert_eq!(success_pie(&dataset, &site), success_pie(&dataset, &site));
    }
}
