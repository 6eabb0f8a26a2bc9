//! Registry loading errors.

use std::path::PathBuf;

/// Errors raised while reading a key-value registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The backing file could not be read.
    #[error("failed to read registry file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A name line was not followed by a value line.
    #[error("line {line}: name '{name}' has no value")]
    MissingValue { name: String, line: usize },

    /// A value line did not hold an integer.
    #[error("line {line}: value '{value}' for '{name}' is not an integer")]
    InvalidValue {
        name: String,
        value: String,
        line: usize,
    },

    /// Summing values went past the range of `i64`.
    #[error("total overflows at '{name}'")]
    Overflow { name: String },
}

impl RegistryError {
    /// Stable identifier for logs and tests.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io",
            Self::MissingValue { .. } => "missing_value",
            Self::InvalidValue { .. } => "invalid_value",
            Self::Overflow { .. } => "overflow",
        }
    }
}
