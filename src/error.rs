use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or discovering plans.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to read plan {index} at {}", path.display())]
    Read {
        index: usize,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no plans found matching {pattern}")]
    NoPlans { pattern: String },
}
