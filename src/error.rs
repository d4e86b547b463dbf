//! Error types for loading annotation manifests

use thiserror::Error;

/// Errors that can occur while reading an annotation manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse manifest TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// 1-based entry number with a blank required field
    #[error("annotation #{index}: '{field}' must not be empty")]
    EmptyField { index: usize, field: &'static str },

    #[error("annotation #{index}: invalid end_date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { index: usize, value: String },
}

impl ManifestError {
    /// Create an empty field error
    pub fn empty_field(index: usize, field: &'static str) -> Self {
        Self::EmptyField { index, field }
    }

    /// Create an invalid date error
    pub fn invalid_date(index: usize, value: impl Into<String>) -> Self {
        Self::InvalidDate {
            index,
            value: value.into(),
        }
    }

    /// The offending manifest entry, if the error concerns a single entry
    pub fn entry(&self) -> Option<usize> {
        match self {
            Self::EmptyField { index, .. } | Self::InvalidDate { index, .. } => Some(*index),
            _ => None,
        }
    }
}
