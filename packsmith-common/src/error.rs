//! Error classification shared across Packsmith crates
//!
//! Packsmith error enums live in the crate that produces them; this module
//! only provides the severity scale they all report through.

/// Severity levels for error classification
///
/// - **Warning**: potential issue but the operation can proceed.
/// - **Error**: the operation failed but the system can continue.
/// - **Critical**: the system cannot continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Potential issue but operation can proceed
    Warning,

    /// Operation failed but system can continue
    Error,

    /// System cannot continue, requires immediate attention
    Critical,
}

/// Trait for error types that have severity levels
///
/// Packsmith error enums implement this so callers can pick logging levels
/// and exit behavior without matching on every variant.
pub trait Severity {
    /// Classify this error's severity.
    fn severity(&self) -> ErrorSeverity;
}
