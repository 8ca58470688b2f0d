//! Chart rendering
//!
//! Turns a [`ChartSpec`] into a Plotly.js figure and into a standalone HTML
//! document that draws it.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::error::RenderResult;
use super::spec::{ChartData, ChartSpec};

/// Plotly.js bundle loaded by every page and snapshot
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Plotly.js figure: traces plus layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

impl Figure {
    pub fn from_spec(spec: &ChartSpec) -> Self {
        match &spec.data {
            ChartData::Pie { labels, values } => Self {
                data: vec![json!({
                    "type": "pie",
                    "labels": labels,
                    "values": values,
                    "hovertemplate": "label=%{label}<br>value=%{value}<extra></extra>",
                })],
                layout: json!({
                    "title": { "text": spec.title },
                    "legend": { "tracegroupgap": 0 },
                }),
            },
            ChartData::Scatter {
                x_label,
                y_label,
                legend_title,
                series,
            } => Self {
                data: series
                    .iter()
                    .map(|s| {
                        let xs: Vec<f64> = s.points.iter().map(|p| p.x).collect();
                        let ys: Vec<f64> = s.points.iter().map(|p| p.y).collect();
                        let text: Vec<&str> = s.points.iter().map(|p| p.text.as_str()).collect();
                        json!({
                            "type": "scatter",
                            "mode": "markers",
                            "name": s.name,
                            "legendgroup": s.name,
                            "x": xs,
                            "y": ys,
                            "text": text,
                            "showlegend": true,
                        })
                    })
                    .collect(),
                layout: json!({
                    "title": { "text": spec.title },
                    "xaxis": { "title": { "text": x_label } },
                    "yaxis": { "title": { "text": y_label } },
                    "legend": { "title": { "text": legend_title }, "tracegroupgap": 0 },
                }),
            },
        }
    }
}

/// Serialize a value for embedding inside a `<script>` element
fn script_json<T: Serialize>(value: &T) -> RenderResult<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Escape text for HTML element content and attribute values
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a standalone HTML document for one chart
pub fn render_document(spec: &ChartSpec) -> RenderResult<String> {
    let figure = script_json(&Figure::from_spec(spec))?;
    let title = escape_html(&spec.title);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <script src="{cdn}" charset="utf-8"></script>
</head>
<body>
    <div id="chart" style="height:100%; width:100%;"></div>
    <script type="text/javascript">
        var figure = {figure};
        Plotly.newPlot("chart", figure.data, figure.layout, {{"responsive": true}});
    </script>
</body>
</html>
"#,
        title = title,
        cdn = PLOTLY_CDN,
        figure = figure,
    ))
}
