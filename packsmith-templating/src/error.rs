//! Error types for templating

use thiserror::Error;

/// Result type for templating operations
pub type Result<T> = std::result::Result<T, TemplatingError>;

/// Errors that can occur while parsing or rendering templates
#[derive(Debug, Error)]
pub enum TemplatingError {
    /// Template parsing failed
    #[error("template parse error: {0}")]
    Parse(String),

    /// Template rendering failed
    #[error("template render error: {0}")]
    Render(String),

    /// A named template could not be resolved
    #[error("template not found: {name}")]
    TemplateNotFound { name: String },

    /// A partial template could not be resolved
    #[error("partial not found: {0}")]
    Partial(String),

    /// Render data could not be converted into a template context
    #[error("invalid render data: {0}")]
    Data(String),

    /// IO error while loading templates
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
