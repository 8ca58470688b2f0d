//! Payload versus outcome scatter chart
//!
//! Driven by the site dropdown and the payload range slider.

use super::spec::{ChartSpec, ScatterPoint, ScatterSeries};
use crate::dataset::{Dataset, PayloadRange, SiteSelection};

pub const X_LABEL: &str = "Payload Mass (kg)";
pub const Y_LABEL: &str = "class";
pub const LEGEND_TITLE: &str = "Booster Version Category";

/// Build the scatter chart for a site selection and payload range
///
/// Points are grouped into one series per booster version category, in the
/// order each category first appears. An empty selection yields a chart
/// with no series.
pub fn payload_scatter(dataset: &Dataset, site: &SiteSelection, range: PayloadRange) -> ChartSpec {
    let mut series: Vec<ScatterSeries> = Vec::new();

    for record in dataset
        .select(site)
        .filter(|r| range.contains(r.payload_mass_kg))
    {
        let point = ScatterPoint {
            x: record.payload_mass_kg,
            y: f64::from(record.outcome.class()),
            text: record
                .booster_version
                .clone()
                .unwrap_or_else(|| record.booster_version_category.clone()),
        };

        match series
            .iter_mut()
            .find(|s| s.name == record.booster_version_category)
        {
            Some(group) => group.points.push(point),
            None => series.push(ScatterSeries {
                name: record.booster_version_category.clone(),
                points: vec![point],
            }),
        }
    }

    let title = if site.is_all() {
        "Payload vs. Success for All Launch Site".to_string()
    } else {
        format!("Payload vs. Success for {}", site)
    };

    ChartSpec::scatter(title, X_LABEL, Y_LABEL, LEGEND_TITLE, series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::spec::ChartData;
    use crate::dataset::{fixtures, LaunchRecord, Outcome};

    fn points(spec: &ChartSpec) -> Vec<(String, f64, f64)> {
        match &spec.data {
            ChartData::Scatter { series, .. } => series
                .iter()
                .flat_map(|s| s.points.iter().map(move |p| (p.text.clone(), p.x, p.y)))
                .collect(),
            other => panic!("expected scatter, got {:?}", other),
        }
    }

    #[test]
    fn test_full_range_all_sites() {
        let dataset = fixtures::dataset();
        let spec = payload_scatter(&dataset, &SiteSelection::All, dataset.payload_bounds());

        assert_eq!(spec.title, "Payload vs. Success for All Launch Site");
        assert_eq!(spec.mark_count(), dataset.len());

        match &spec.data {
            ChartData::Scatter {
                series,
                x_label,
                y_label,
                legend_title,
            } => {
                let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
                assert_eq!(names, ["v1.0", "v1.1", "FT", "B4", "B5"]);
                assert_eq!(x_label, X_LABEL);
                assert_eq!(y_label, Y_LABEL);
                assert_eq!(legend_title, LEGEND_TITLE);
            }
            other => panic!("expected scatter, got {:?}", other),
        }
    }

    #[test]
    fn test_site_and_range_filter() {
        let dataset = fixtures::dataset();
        let spec = payload_scatter(
            &dataset,
            &SiteSelection::site("KSC LC-39A"),
            PayloadRange::new(2490.0, 5600.0),
        );

        assert_eq!(spec.title, "Payload vs. Success for KSC LC-39A");
        let mut xs: Vec<f64> = points(&spec).into_iter().map(|(_, x, _)| x).collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(xs, vec![2490.0, 3600.0, 5600.0]);
    }

    #[test]
    fn test_range_outside_data_is_empty() {
        let dataset = fixtures::dataset();
        let above = PayloadRange::new(dataset.max_payload() + 1.0, dataset.max_payload() + 1000.0);
        let below = PayloadRange::new(-1000.0, dataset.min_payload() - 1.0);

        for range in [above, below] {
            let spec = payload_scatter(&dataset, &SiteSelection::All, range);
            assert!(spec.is_empty());
            assert_eq!(spec.mark_count(), 0);
        }
    }

    #[test]
    fn test_zero_range_keeps_only_zero_payloads() {
        let dataset = fixtures::dataset();
        let spec = payload_scatter(&dataset, &SiteSelection::All, PayloadRange::new(0.0, 0.0));
        let plotted = points(&spec);

        assert_eq!(plotted.len(), 2);
        assert!(plotted.iter().all(|(_, x, _)| *x == 0.0));
    }

    #[test]
    fn test_widening_is_monotonic() {
        let dataset = fixtures::dataset();
        let narrow = PayloadRange::new(500.0, 3600.0);
        let wide = PayloadRange::new(0.0, 6070.0);
        assert!(wide.covers(&narrow));

        for site in [SiteSelection::All, SiteSelection::site("CCAFS LC-40")] {
            let inner = points(&payload_scatter(&dataset, &site, narrow));
            let outer = points(&payload_scatter(&dataset, &site, wide));
            assert!(inner.len() <= outer.len());
            for point in &inner {
                assert!(outer.contains(point), "{:?} missing from wider range", point);
            }
        }
    }

    #[test]
    fn test_hover_text_falls_back_to_category() {
        let dataset = crate::dataset::parse_csv(
            "Launch Site,Payload Mass (kg),class,Booster Version Category\nKSC LC-39A,100,1,FT\n",
        )
        .unwrap();
        let spec = payload_scatter(&dataset, &SiteSelection::All, dataset.payload_bounds());
        assert_eq!(points(&spec), vec![("FT".to_string(), 100.0, 1.0)]);
    }

    #[test]
    fn test_hover_text_uses_booster_version() {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("KSC LC-39A", 5300.0, Outcome::Success, "FT")
                .flight_number(32)
                .booster_version("F9 FT B1031.1"),
            LaunchRecord::new("KSC LC-39A", 2490.0, Outcome::Failure, "FT"),
        ])
        .unwrap();
        let spec = payload_scatter(
            &dataset,
            &SiteSelection::site("KSC LC-39A"),
            dataset.payload_bounds(),
        );
        assert_eq!(spec.title, "Payload vs. Success for KSC LC-39A");
        assert_eq!(
            points(&spec),
            vec![
                ("F9 FT B1031.1".to_string(), 5300.0, 1.0),
                ("FT".to_string(), 2490.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let dataset = fixtures::dataset();
        let range = PayloadRange::new(0.0, 5000.0);
        assert_eq!(
            payload_scatter(&dataset, &SiteSelection::All, range),
            payload_scatter(&dataset, &SiteSelection::All, range)
        );
    }
}
