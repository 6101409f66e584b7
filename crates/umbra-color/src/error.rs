//! Error types for inversion parameters.
//!
//! The transform itself cannot fail; only building an inverter from
//! user-supplied parameters or files can.

use thiserror::Error;

/// Color operation error.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A parameter is outside its allowed range.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParams {
        /// Parameter name as written in YAML.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Allowed range.
        reason: &'static str,
    },

    /// I/O error reading a parameter file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
