//! Standalone error types for cairn-stack
//!
//! Uses thiserror for clean, idiomatic Rust error definitions.

use thiserror::Error;

#[cfg(feature = "logging")]
use tracing::{error, warn};

// ============================================================================
// Main Error Type
// ============================================================================

/// Stack operation errors
///
/// Every failing operation leaves the stack's observable state exactly as it
/// was before the call; errors are values, never aborts, and nothing is
/// retried internally.
#[must_use = "errors should be handled"]
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    // --- Allocation Errors ---
    #[error("memory allocation of {bytes} bytes failed")]
    OutOfMemory { bytes: usize },

    // --- Capacity Errors ---
    #[error("stack is full: hard ceiling of {capacity} elements reached")]
    StackFull { capacity: usize },

    #[error("cannot pop from an empty stack")]
    StackEmpty,

    // --- Element Policy Errors ---
    #[error("text element of {len} bytes exceeds the {max} byte limit")]
    ElementTooLarge { len: usize, max: usize },
}

impl StackError {
    /// Check if error is retryable
    ///
    /// `StackFull` and `StackEmpty` clear once the caller pops or pushes;
    /// allocation failures and oversized payloads do not.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StackFull { .. } | Self::StackEmpty)
    }

    /// Get error code for categorization
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::OutOfMemory { .. } => "STACK:ALLOC:FAILED",
            Self::StackFull { .. } => "STACK:CAPACITY:FULL",
            Self::StackEmpty => "STACK:POP:EMPTY",
            Self::ElementTooLarge { .. } => "STACK:ELEMENT:TOO_LARGE",
        }
    }

    // ============================================================================
    // Convenience Constructors
    // ============================================================================

    /// Create out-of-memory error
    pub fn out_of_memory(bytes: usize) -> Self {
        #[cfg(feature = "logging")]
        error!("memory allocation of {} bytes failed", bytes);

        Self::OutOfMemory { bytes }
    }

    /// Create stack-full error
    pub fn stack_full(capacity: usize) -> Self {
        #[cfg(feature = "logging")]
        warn!("push rejected: hard ceiling of {} elements reached", capacity);

        Self::StackFull { capacity }
    }

    /// Create stack-empty error
    #[must_use]
    pub fn stack_empty() -> Self {
        Self::StackEmpty
    }

    /// Create element-too-large error
    #[must_use]
    pub fn element_too_large(len: usize, max: usize) -> Self {
        Self::ElementTooLarge { len, max }
    }
}

// ============================================================================
// Result Type
// ============================================================================

/// Result type for stack operations
pub type StackResult<T> = core::result::Result<T, StackError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_numbers() {
        let error = StackError::out_of_memory(1024);
        assert!(error.to_string().contains("1024"));

        let error = StackError::stack_full(32768);
        assert!(error.to_string().contains("32768"));

        let error = StackError::element_too_large(300, 256);
        assert!(error.to_string().contains("300"));
        assert!(error.to_string().contains("256"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(StackError::out_of_memory(16).code(), "STACK:ALLOC:FAILED");
        assert_eq!(StackError::stack_full(32768).code(), "STACK:CAPACITY:FULL");
        assert_eq!(StackError::stack_empty().code(), "STACK:POP:EMPTY");
        assert_eq!(
            StackError::element_too_large(512, 256).code(),
            "STACK:ELEMENT:TOO_LARGE"
        );
    }

    #[test]
    fn test_retryable() {
        assert!(StackError::stack_full(32768).is_retryable());
        assert!(StackError::stack_empty().is_retryable());
        assert!(!StackError::out_of_memory(64).is_retryable());
        assert!(!StackError::element_too_large(512, 256).is_retryable());
    }
}
