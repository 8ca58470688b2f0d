//! Dashboard widget tree
//!
//! A static description of the page: title, site dropdown, pie chart,
//! payload slider, scatter chart. Built once from the dataset and served
//! both as JSON and as HTML.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::dataset::{Dataset, PayloadRange, ALL_SITES};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const SITE_DROPDOWN: &str = "site-dropdown";
pub const PAYLOAD_SLIDER: &str = "payload-slider";
pub const PIE_GRAPH: &str = "success-pie-chart";
pub const SCATTER_GRAPH: &str = "success-payload-scatter-chart";

/// Slider step in kilograms
pub const SLIDER_STEP: f64 = 1000.0;

/// One node of the layout tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Widget {
    Container {
        children: Vec<Widget>,
    },
    Heading {
        text: String,
        style: BTreeMap<String, String>,
    },
    Dropdown {
        id: String,
        options: Vec<DropdownOption>,
        value: String,
        placeholder: String,
        searchable: bool,
    },
    Break,
    Paragraph {
        text: String,
    },
    Graph {
        id: String,
    },
    RangeSlider {
        id: String,
        min: f64,
        max: f64,
        step: f64,
        value: PayloadRange,
        marks: Vec<SliderMark>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Labelled tick under the range slider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
    /// Label rotation in degrees
    pub rotate_deg: i32,
}

/// Options for the site dropdown: "All sites" first, then each site
pub fn site_options(sites: &[String]) -> Vec<DropdownOption> {
    std::iter::once(DropdownOption {
        label: "All sites".to_string(),
        value: ALL_SITES.to_string(),
    })
    .chain(sites.iter().map(|site| DropdownOption {
        label: site.clone(),
        value: site.clone(),
    }))
    .collect()
}

/// Format a payload the way slider marks show it (`0.0`, `9600.0`)
pub fn format_kg(value: f64) -> String {
    format!("{:?}", value)
}

/// Build the dashboard layout from the site list and payload bounds
pub fn build_layout(sites: &[String], bounds: PayloadRange) -> Widget {
    let heading_style = BTreeMap::from([
        ("textAlign".to_string(), "center".to_string()),
        ("color".to_string(), "#503D36".to_string()),
        ("font-size".to_string(), "40".to_string()),
    ]);

    let marks = [bounds.low, bounds.high]
        .into_iter()
        .map(|value| SliderMark {
            value,
            label: format_kg(value),
            rotate_deg: -45,
        })
        .collect::<Vec<_>>();

    Widget::Container {
        children: vec![
            Widget::Heading {
                text: DASHBOARD_TITLE.to_string(),
                style: heading_style,
            },
            Widget::Dropdown {
                id: SITE_DROPDOWN.to_string(),
                options: site_options(sites),
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            },
            Widget::Break,
            Widget::Graph {
                id: PIE_GRAPH.to_string(),
            },
            Widget::Break,
            Widget::Paragraph {
                text: "Payload range (Kg):".to_string(),
            },
            Widget::RangeSlider {
                id: PAYLOAD_SLIDER.to_string(),
                min: bounds.low,
                max: bounds.high,
                step: SLIDER_STEP,
                value: bounds,
                marks,
            },
            Widget::Graph {
                id: SCATTER_GRAPH.to_string(),
            },
        ],
    }
}

/// Layout for a loaded dataset
pub fn layout_for(dataset: &Dataset) -> Widget {
    build_layout(dataset.sites(), dataset.payload_bounds())
}

impl Widget {
    /// Depth-first search for a widget by id
    pub fn find(&self, wanted: &str) -> Option<&Widget> {
        match self {
            Widget::Container { children } => children.iter().find_map(|c| c.find(wanted)),
            Widget::Dropdown { id, .. } | Widget::Graph { id } | Widget::RangeSlider { id, .. }
                if id == wanted =>
            {
                Some(self)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures;

    #[test]
    fn test_dropdown_options_derived_from_sites() {
        let layout = layout_for(&fixtures::dataset());

        match layout.find(SITE_DROPDOWN) {
            Some(Widget::Dropdown { options, value, .. }) => {
                let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
                assert_eq!(
                    values,
                    ["ALL", "CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"]
                );
                assert_eq!(options[0].label, "All sites");
                assert_eq!(value, "ALL");
            }
            other => panic!("expected dropdown, got {:?}", other),
        }
    }

    #[test]
    fn test_slider_seeded_from_extrema() {
        let layout = build_layout(&[], PayloadRange::new(0.0, 9600.0));

        match layout.find(PAYLOAD_SLIDER) {
            Some(Widget::RangeSlider {
                min,
                max,
                step,
                value,
                marks,
                ..
            }) => {
                assert_eq!(*min, 0.0);
                assert_eq!(*max, 9600.0);
                assert_eq!(*step, 1000.0);
                assert_eq!(*value, PayloadRange::new(0.0, 9600.0));
                assert_eq!(marks[0].label, "0.0");
                assert_eq!(marks[1].label, "9600.0");
                assert_eq!(marks[1].rotate_deg, -45);
            }
            other => panic!("expected range slider, got {:?}", other),
        }
    }

    #[test]
    fn test_graph_regions_present() {
        let layout = build_layout(&[], PayloadRange::new(0.0, 1.0));
        assert!(matches!(layout.find(PIE_GRAPH), Some(Widget::Graph { .. })));
        assert!(matches!(layout.find(SCATTER_GRAPH), Some(Widget::Graph { .. })));
        assert!(layout.find("missing").is_none());
    }

    #[test]
    fn test_serialized_tags() {
        let layout = build_layout(&[], PayloadRange::new(0.0, 1.0));
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["type"], "container");
        assert_eq!(json["children"][0]["type"], "heading");
        assert_eq!(json["children"][6]["type"], "range_slider");
        assert_eq!(json["children"][6]["value"], serde_json::json!([0.0, 1.0]));
    }
}
