//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks; everything in
//! it is read-only after startup.

use std::sync::Arc;
use std::time::Instant;

use crate::chart::SnapshotWriter;
use crate::dashboard::CallbackRegistry;
use crate::dataset::Dataset;
use crate::layout::{layout_for, render_page, Widget};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Launch table loaded at startup
    pub dataset: Arc<Dataset>,
    /// Callback registration table
    pub registry: Arc<CallbackRegistry>,
    /// Widget tree built from the dataset
    pub layout: Arc<Widget>,
    /// Dashboard page rendered from `layout`
    pub page: Arc<String>,
    /// Snapshot writer, `None` when snapshots are disabled
    pub snapshots: Option<SnapshotWriter>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state for a dataset with the standard callbacks and no snapshots
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_registry(dataset, CallbackRegistry::standard())
    }

    /// Create state with a custom registration table
    pub fn with_registry(dataset: Arc<Dataset>, registry: CallbackRegistry) -> Self {
        let layout = layout_for(&dataset);
        let page = render_page(&layout);

        Self {
            dataset,
            registry: Arc::new(registry),
            layout: Arc::new(layout),
            page: Arc::new(page),
            snapshots: None,
            start_time: Instant::now(),
        }
    }

    /// Builder method: refresh snapshot files after each callback
    pub fn with_snapshots(mut self, writer: SnapshotWriter) -> Self {
        self.snapshots = Some(writer);
        self
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
