//! Chart specifications
//!
//! A `ChartSpec` is the declarative output of a dashboard callback: what to
//! draw, never how. Rendering lives in [`super::render`].

use serde::{Deserialize, Serialize};

/// Declarative chart description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Title shown above the chart
    pub title: String,
    /// Kind-specific data
    #[serde(flatten)]
    pub data: ChartData,
}

/// Chart data, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChartData {
    /// Slices with `labels[i]` paired to `values[i]`
    Pie {
        labels: Vec<String>,
        values: Vec<u64>,
    },
    /// Point series, one per colour group
    Scatter {
        x_label: String,
        y_label: String,
        legend_title: String,
        series: Vec<ScatterSeries>,
    },
}

/// One colour group of a scatter chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<ScatterPoint>,
}

/// A single plotted launch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// Hover label
    pub text: String,
}

/// Chart kind without data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Scatter,
}

impl ChartSpec {
    pub fn pie(title: impl Into<String>, labels: Vec<String>, values: Vec<u64>) -> Self {
        debug_assert_eq!(labels.len(), values.len());
        Self {
            title: title.into(),
            data: ChartData::Pie { labels, values },
        }
    }

    pub fn scatter(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        legend_title: impl Into<String>,
        series: Vec<ScatterSeries>,
    ) -> Self {
        Self {
            title: title.into(),
            data: ChartData::Scatter {
                x_label: x_label.into(),
                y_label: y_label.into(),
                legend_title: legend_title.into(),
                series,
            },
        }
    }

    pub fn kind(&self) -> ChartKind {
        match self.data {
            ChartData::Pie { .. } => ChartKind::Pie,
            ChartData::Scatter { .. } => ChartKind::Scatter,
        }
    }

    /// Slice count for pies, point count for scatters
    pub fn mark_count(&self) -> usize {
        match &self.data {
            ChartData::Pie { values, .. } => values.len(),
            ChartData::Scatter { series, .. } => series.iter().map(|s| s.points.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mark_count() == 0
    }
}
