//! Dashboard Callbacks
//!
//! Server half of the reactive runtime: an explicit registration table
//! from input components to pure chart handlers and their output graphs.
//!
//! ## Standard wiring
//!
//! | Output | Inputs | Snapshot |
//! |---|---|---|
//! | `success-pie-chart.figure` | `site-dropdown.value` | `success_pie_chart.html` |
//! | `success-payload-scatter-chart.figure` | `site-dropdown.value`, `payload-slider.value` | `success_payload_scatter_chart.html` |

mod error;
mod inputs;
mod registry;

pub use error::{CallbackError, CallbackResult};
pub use inputs::CallbackInputs;
pub use registry::{Callback, CallbackRegistry, CallbackTable, ComponentRef, Handler};
