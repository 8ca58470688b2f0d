//! Dashboard page rendering
//!
//! Turns the widget tree into HTML and appends the client half of the
//! callback runtime: a script that reads the registration table from
//! `/api/v1/callbacks`, posts input values when they change, and redraws
//! the target graph with `Plotly.react`.

use std::fmt::Write;

use super::widgets::{format_kg, Widget, DASHBOARD_TITLE};
use crate::chart::{escape_html, PLOTLY_CDN};

/// Client runtime, inlined into the page
const RUNTIME_SCRIPT: &str = r#"
(function () {
    "use strict";

    function snap(slider, value) {
        var min = Number(slider.dataset.min);
        var max = Number(slider.dataset.max);
        var step = Number(slider.dataset.step);
        if (value >= max) { return max; }
        if (value <= min) { return min; }
        return Math.min(max, min + Math.round((value - min) / step) * step);
    }

    function readValue(id) {
        var el = document.getElementById(id);
        if (el.dataset.widget === "range-slider") {
            var low = document.getElementById(id + "-low");
            var high = document.getElementById(id + "-high");
            return [Number(low.value), Number(high.value)];
        }
        return el.value;
    }

    function showError(outputId, message) {
        var el = document.getElementById(outputId);
        el.textContent = "Callback error: " + message;
    }

    // Latest request number per output; older responses are dropped
    var latest = {};

    async function readBody(response) {
        var text = await response.text();
        try {
            return { json: JSON.parse(text), text: text };
        } catch (e) {
            return { json: null, text: text };
        }
    }

    async function fire(callback) {
        var outputId = callback.output.id;
        var seq = (latest[outputId] || 0) + 1;
        latest[outputId] = seq;

        var inputs = {};
        callback.inputs.forEach(function (input) {
            inputs[input.id] = readValue(input.id);
        });

        var response, body;
        try {
            response = await fetch("/api/v1/callbacks/" + encodeURIComponent(outputId), {
                method: "POST",
                headers: { "Content-Type": "application/json" },
                body: JSON.stringify({ inputs: inputs })
            });
            body = await readBody(response);
        } catch (e) {
            if (seq === latest[outputId]) { showError(outputId, e.message); }
            return;
        }
        if (seq !== latest[outputId]) { return; }

        if (!response.ok) {
            var error = body.json && body.json.error;
            showError(outputId, error ? error.message : (body.text || response.statusText));
            return;
        }
        Plotly.react(outputId, body.json.figure.data, body.json.figure.layout, { responsive: true });
    }

    function wireSlider(slider) {
        var low = document.getElementById(slider.id + "-low");
        var high = document.getElementById(slider.id + "-high");
        var label = document.getElementById(slider.id + "-value");
        function keepOrdered(moved) {
            low.value = snap(slider, Number(low.value));
            high.value = snap(slider, Number(high.value));
            if (Number(low.value) > Number(high.value)) {
                if (moved === low) { high.value = low.value; } else { low.value = high.value; }
            }
            label.textContent = low.value + " – " + high.value;
        }
        // Handle changes bubble up to the slider element
        low.addEventListener("input", function () { keepOrdered(low); });
        high.addEventListener("input", function () { keepOrdered(high); });
    }

    async function start() {
        document.querySelectorAll("[data-widget=range-slider]").forEach(wireSlider);

        var response = await fetch("/api/v1/callbacks");
        var table = (await readBody(response)).json;
        if (!response.ok || !table) {
            console.error("launchdash: cannot read callback table", response.status);
            return;
        }

        table.callbacks.forEach(function (callback) {
            callback.inputs.forEach(function (input) {
                document.getElementById(input.id).addEventListener("change", function () {
                    fire(callback);
                });
            });
            fire(callback);
        });
    }

    start();
})();
"#;

fn render_widget(out: &mut String, widget: &Widget) {
    match widget {
        Widget::Container { children } => {
            out.push_str("<div class=\"dashboard\">\n");
            for child in children {
                render_widget(out, child);
            }
            out.push_str("</div>\n");
        }
        Widget::Heading { text, style } => {
            let css = style
                .iter()
                .map(|(key, value)| css_declaration(key, value))
                .collect::<Vec<_>>()
                .join("; ");
            let _ = writeln!(
                out,
                "<h1 style=\"{}\">{}</h1>",
                escape_html(&css),
                escape_html(text)
            );
        }
        Widget::Dropdown {
            id,
            options,
            value,
            placeholder,
            searchable,
        } => {
            let _ = writeln!(
                out,
                "<select id=\"{}\" data-widget=\"dropdown\" data-searchable=\"{}\" aria-label=\"{}\" title=\"{}\">",
                escape_html(id),
                searchable,
                escape_html(placeholder),
                escape_html(placeholder)
            );
            for option in options {
                let selected = if option.value == *value { " selected" } else { "" };
                let _ = writeln!(
                    out,
                    "  <option value=\"{}\"{}>{}</option>",
                    escape_html(&option.value),
                    selected,
                    escape_html(&option.label)
                );
            }
            out.push_str("</select>\n");
        }
        Widget::Break => out.push_str("<br>\n"),
        Widget::Paragraph { text } => {
            let _ = writeln!(out, "<p>{}</p>", escape_html(text));
        }
        Widget::Graph { id } => {
            let _ = writeln!(
                out,
                "<div><div id=\"{}\" class=\"graph\" data-widget=\"graph\"></div></div>",
                escape_html(id)
            );
        }
        Widget::RangeSlider {
            id,
            min,
            max,
            step,
            value,
            marks,
        } => {
            let id = escape_html(id);
            let _ = writeln!(
                out,
                "<div id=\"{id}\" class=\"range-slider\" data-widget=\"range-slider\" data-min=\"{min}\" data-max=\"{max}\" data-step=\"{step}\">",
            );
            for (suffix, handle) in [("low", value.low), ("high", value.high)] {
                let _ = writeln!(
                    out,
                    "  <input type=\"range\" id=\"{id}-{suffix}\" min=\"{min}\" max=\"{max}\" step=\"any\" value=\"{handle}\">",
                );
            }
            let _ = writeln!(
                out,
                "  <span id=\"{id}-value\" class=\"range-value\">{} \u{2013} {}</span>",
                value.low, value.high
            );
            out.push_str("  <div class=\"marks\">\n");
            for mark in marks {
                let _ = writeln!(
                    out,
                    "    <span class=\"mark\" data-value=\"{}\" style=\"transform: rotate({}deg)\">{}</span>",
                    mark.value,
                    mark.rotate_deg,
                    escape_html(&mark.label)
                );
            }
            out.push_str("  </div>\n</div>\n");
        }
    }
}

/// `textAlign` style keys become `text-align`; bare numeric font sizes get `px`
fn css_declaration(key: &str, value: &str) -> String {
    let mut property = String::with_capacity(key.len() + 2);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            property.push('-');
            property.push(c.to_ascii_lowercase());
        } else {
            property.push(c);
        }
    }
    let value = if property == "font-size" && value.parse::<f64>().is_ok() {
        format!("{}px", value)
    } else {
        value.to_string()
    };
    format!("{}: {}", property, value)
}

/// Render the full dashboard page
pub fn render_page(layout: &Widget) -> String {
    let mut body = String::new();
    render_widget(&mut body, layout);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <script src="{cdn}" charset="utf-8"></script>
    <style>
        body {{ font-family: sans-serif; margin: 2rem; }}
        select {{ width: 100%; padding: 0.4rem; }}
        .range-slider {{ display: flex; flex-wrap: wrap; align-items: center; gap: 0.5rem; }}
        .range-slider input {{ flex: 1 1 40%; }}
        .marks {{ width: 100%; display: flex; justify-content: space-between; }}
        .graph {{ min-height: 450px; }}
    </style>
</head>
<body>
{body}<script type="text/javascript">{script}</script>
</body>
</html>
"#,
        title = DASHBOARD_TITLE,
        cdn = PLOTLY_CDN,
        body = body,
        script = RUNTIME_SCRIPT,
    )
}

/// Human-readable payload span, used in logs
pub fn describe_bounds(min: f64, max: f64) -> String {
    format!("{} kg .. {} kg", format_kg(min), format_kg(max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{fixtures, PayloadRange};
    use crate::layout::{build_layout, layout_for};

    #[test]
    fn test_page_contains_widgets() {
        let html = render_page(&layout_for(&fixtures::dataset()));

        assert!(html.contains("<title>SpaceX Launch Records Dashboard</title>"));
        assert!(html.contains(
            "<h1 style=\"color: #503D36; font-size: 40px; text-align: center\">SpaceX Launch Records Dashboard</h1>"
        ));
        assert!(html.contains("<select id=\"site-dropdown\""));
        assert!(html.contains("<option value=\"ALL\" selected>All sites</option>"));
        assert!(html.contains("<option value=\"KSC LC-39A\">KSC LC-39A</option>"));
        assert!(html.contains("id=\"success-pie-chart\""));
        assert!(html.contains("id=\"success-payload-scatter-chart\""));
        assert!(html.contains("id=\"payload-slider-low\""));
        assert!(html.contains("data-step=\"1000\""));
        assert!(html.contains("<p>Payload range (Kg):</p>"));
        assert!(html.contains(PLOTLY_CDN));
        assert!(html.contains("/api/v1/callbacks"));
    }

    #[test]
    fn test_site_names_are_escaped() {
        let sites = vec!["<b>Pad</b>".to_string()];
        let html = render_page(&build_layout(&sites, PayloadRange::new(0.0, 1.0)));
        assert!(html.contains("&lt;b&gt;Pad&lt;/b&gt;"));
        assert!(!html.contains("<b>Pad</b>"));
    }

    #[test]
    fn test_slider_handles_nested_in_listened_element() {
        let html = render_page(&layout_for(&fixtures::dataset()));
        let slider = html.find("<div id=\"payload-slider\"").unwrap();
        let low = html.find("id=\"payload-slider-low\"").unwrap();
        let high = html.find("id=\"payload-slider-high\"").unwrap();
        let marks = html[slider..].find("class=\"marks\"").unwrap() + slider;
        assert!(slider < low && low < high && high < marks);

        // one change event per release, reaching the slider by bubbling
        assert!(!RUNTIME_SCRIPT.contains("dispatchEvent"));
    }

    #[test]
    fn test_runtime_drops_superseded_responses() {
        assert!(RUNTIME_SCRIPT.contains("latest[outputId] = seq;"));
        assert!(RUNTIME_SCRIPT.contains("if (seq !== latest[outputId]) { return; }"));
        // error bodies need not be JSON
        assert!(RUNTIME_SCRIPT.contains("await response.text()"));
        assert!(!RUNTIME_SCRIPT.contains("await response.json()"));
    }

    #[test]
    fn test_css_declaration() {
        assert_eq!(css_declaration("textAlign", "center"), "text-align: center");
        assert_eq!(css_declaration("font-size", "40"), "font-size: 40px");
        assert_eq!(css_declaration("color", "#503D36"), "color: #503D36");
    }

    #[test]
    fn test_describe_bounds() {
        assert_eq!(describe_bounds(0.0, 9600.0), "0.0 kg .. 9600.0 kg");
    }
}
