use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the data layer.
#[derive(Debug, Error)]
pub enum DataError {
    /// The dataset file is missing or could not be parsed. Fatal at startup.
    #[error("dataset '{path}' is unavailable: {reason}")]
    DataUnavailable { path: PathBuf, reason: String },
}
