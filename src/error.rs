//! Error types for classification and rule-set construction.
//!
//! The engine has exactly one call-time failure: input that exceeds the
//! configured size cap. Everything else that can go wrong (unparseable
//! config, malformed rule patterns, bad thresholds) is rejected when the
//! rule set is built, never during `classify`.

use std::path::PathBuf;
use thiserror::Error;

/// Call-time errors from [`crate::Classifier::classify`].
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Input exceeded the configured byte cap before any pattern ran.
    #[error("input is {len} bytes, which exceeds the {max} byte limit")]
    InputTooLarge { len: usize, max: usize },
}

/// Construction-time errors from loading or compiling a rule set.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {message}")]
    Parse { message: String },

    #[error("invalid rule pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid threshold: {message}")]
    InvalidThreshold { message: String },
}
