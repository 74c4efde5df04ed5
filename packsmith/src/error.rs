//! Error types for the package builder

use packsmith_common::{ErrorSeverity, Severity};
use thiserror::Error;

/// Result type for build operations
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors that can occur while building a package
#[derive(Debug, Error)]
pub enum BuildError {
    /// Template resolution or rendering failed
    #[error(transparent)]
    Templating(#[from] packsmith_templating::TemplatingError),

    /// Field inference failed
    #[error(transparent)]
    Fields(#[from] packsmith_fields::FieldsError),

    /// A data stream had no samples to infer fields from
    #[error("data stream '{data_stream}' has no samples")]
    NoSamples { data_stream: String },

    /// An integration with no data streams cannot be built
    #[error("integration '{name}' has no data streams")]
    NoDataStreams { name: String },

    /// IO error while writing package files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML error while reading or writing field files
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Severity for BuildError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // Empty inputs are caller mistakes; the rest is fatal for
            // the invocation.
            BuildError::NoSamples { .. } | BuildError::NoDataStreams { .. } => {
                ErrorSeverity::Error
            }
            _ => ErrorSeverity::Critical,
        }
    }
}
