//! Static chart snapshots
//!
//! Each callback firing may overwrite a fixed-name HTML document with the
//! latest chart. Nothing is versioned; concurrent writes to one file are
//! last-write-wins.

use std::path::{Path, PathBuf};

use super::error::{RenderError, RenderResult};
use super::render::render_document;
use super::spec::ChartSpec;

/// Snapshot file for the outcome pie chart
pub const PIE_SNAPSHOT: &str = "success_pie_chart.html";

/// Snapshot file for the payload scatter chart
pub const SCATTER_SNAPSHOT: &str = "success_payload_scatter_chart.html";

/// Writes rendered charts into one output directory
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    dir: PathBuf,
}

impl SnapshotWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path a snapshot name resolves to
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Render `spec` and overwrite `file_name` with it
    pub async fn persist(&self, file_name: &str, spec: &ChartSpec) -> RenderResult<PathBuf> {
        let document = render_document(spec)?;
        let path = self.path_for(file_name);

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| RenderError::Write {
                path: self.dir.clone(),
                source,
            })?;
        tokio::fs::write(&path, document)
            .await
            .map_err(|source| RenderError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), title = %spec.title, "Snapshot written");
        Ok(path)
    }
}
