//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::chart::{ChartSpec, Figure};
use crate::dashboard::{CallbackInputs, ComponentRef};

/// Callback invocation request
#[derive(Debug, Deserialize)]
pub struct CallbackRequest {
    /// Current value of each input component, keyed by id
    pub inputs: CallbackInputs,
}

/// Callback invocation response
#[derive(Debug, Serialize)]
pub struct CallbackResponse {
    /// Component property that should be redrawn
    pub output: ComponentRef,
    /// Plotly figure for the output graph
    pub figure: Figure,
    /// Declarative chart the figure was rendered from
    pub spec: ChartSpec,
    /// Snapshot file refreshed by this call, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, unhealthy
    pub status: String,
    /// Number of loaded launch records
    pub records: usize,
    /// Registered callbacks
    pub callbacks: usize,
    /// Whether snapshot files are being written
    pub snapshots: bool,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
