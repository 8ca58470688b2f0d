//! Charts
//!
//! The two dashboard callbacks, the declarative chart model they produce,
//! and the Plotly rendering plus snapshot persistence applied afterwards.
//!
//! Computing a chart is pure: [`success_pie`] and [`payload_scatter`] only
//! read the dataset. Writing a snapshot is a separate, explicit call on
//! [`SnapshotWriter`].

mod error;
mod pie;
mod render;
mod scatter;
mod snapshot;
mod spec;

pub use error::{RenderError, RenderResult};
pub use pie::{success_pie, ALL_SITES_TITLE};
pub use render::{render_document, Figure, PLOTLY_CDN};
pub(crate) use render::escape_html;
pub use scatter::{payload_scatter, LEGEND_TITLE, X_LABEL, Y_LABEL};
pub use snapshot::{SnapshotWriter, PIE_SNAPSHOT, SCATTER_SNAPSHOT};
pub use spec::{ChartData, ChartKind, ChartSpec, ScatterPoint, ScatterSeries};
