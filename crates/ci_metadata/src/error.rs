use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("environment variable {var} is not set")]
    MissingConfig { var: String },
    /// The extension includes its leading dot, and is empty if the path has none.
    #[error("unsupported metadata file extension {extension:?}")]
    UnsupportedFormat { extension: String },
    #[error("failed to open metadata file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write to metadata file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn missing_config(var: impl Into<String>) -> Self {
        Self::MissingConfig { var: var.into() }
    }
}
