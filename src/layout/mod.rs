//! Dashboard Layout
//!
//! Static widget tree and its HTML rendering.

mod page;
mod widgets;

pub use page::{describe_bounds, render_page};
pub use widgets::{
    build_layout, format_kg, layout_for, site_options, DropdownOption, SliderMark, Widget,
    DASHBOARD_TITLE, PAYLOAD_SLIDER, PIE_GRAPH, SCATTER_GRAPH, SITE_DROPDOWN, SLIDER_STEP,
};
