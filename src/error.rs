use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop the dashboard pipeline.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The dataset file could not be read or parsed.
    #[error("failed to load dataset {}: {reason:#}", path.display())]
    Load { path: PathBuf, reason: anyhow::Error },

    /// A column needed for filtering or aggregation is absent after header
    /// normalization.
    #[error("Column '{0}' not found! Check your dataset.")]
    MissingColumn(String),
}
