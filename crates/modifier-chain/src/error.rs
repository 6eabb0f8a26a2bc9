//! Errors raised while assembling or running a chain.
//!
//! Modifiers themselves are total: they operate on in-memory data and cannot
//! fail. The only failures are structural, reported through [`ChainError`].

/// Severity level of a chain error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input from the caller; retrying unchanged will fail again.
    Validation,

    /// Misuse of a chain that indicates a bug in the assembling code.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Structural chain errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChainError {
    /// A missing modifier was offered for attachment.
    #[error("cannot attach a missing modifier")]
    InvalidChain,

    /// The chain already ran and is configured to refuse further runs.
    #[error("chain already handled {runs} time(s) and re-entry is guarded")]
    ReentrantHandle { runs: usize },
}

impl ChainError {
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidChain => ErrorSeverity::Validation,
            Self::ReentrantHandle { .. } => ErrorSeverity::Internal,
        }
    }

    /// Stable identifier for logs and tests.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidChain => "invalid_chain",
            Self::ReentrantHandle { .. } => "reentrant_handle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert_eq!(ChainError::InvalidChain.severity(), ErrorSeverity::Validation);
        assert!(ChainError::ReentrantHandle { runs: 1 }.severity().is_internal());
        assert_eq!(ChainError::InvalidChain.error_code(), "invalid_chain");
    }

    #[test]
    fn display_mentions_run_count() {
        let err = ChainError::ReentrantHandle { runs: 3 };
        assert_eq!(
            err.to_string(),
            "chain already handled 3 time(s) and re-entry is guarded"
        );
    }
}
