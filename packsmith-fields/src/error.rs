//! Error types for field inference

use thiserror::Error;

/// Result type for field operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur while inferring or serializing fields
#[derive(Debug, Error)]
pub enum FieldsError {
    /// The merged sample document is not a JSON object
    #[error("merged document is not an object, cannot infer fields")]
    NotAnObject,

    /// No samples were provided for inference
    #[error("no samples provided")]
    NoSamples,

    /// A sample line or document failed to parse as JSON
    #[error("invalid sample JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
