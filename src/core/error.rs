//! Error types for the generation core

use thiserror::Error;

/// Main error type for the generation core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("smoothing fraction {0} outside [0, 1]")]
    SmoothingFraction(f64),
}

impl Error {
    /// Whether this error signals a campaign/channel setup defect.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}

/// Caller-side setup defects. Never transient, never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("no {attribute} entries configured for this campaign")]
    EmptyDomain { attribute: String },

    #[error("channel '{label}': base frequency {value} outside (0, 1]")]
    InvalidFrequency { label: String, value: f64 },

    #[error("channel '{label}': needs at least one octave, got {octaves}")]
    InvalidOctaves { label: String, octaves: u32 },

    #[error("channel '{label}': {parameter} must be positive and finite, got {value}")]
    NonPositive {
        label: String,
        parameter: &'static str,
        value: f64,
    },
}
