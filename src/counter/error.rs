//! Error types for counter operations.

use thiserror::Error;

/// Errors that can surface from the counter gateway, store or pipeline.
///
/// `Clone` because a single coalesced persist outcome is delivered to every
/// caller that joined the burst.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterError {
    /// Simulated remote call failure.
    #[error("Transient I/O error during {operation}: {message}")]
    TransientIo {
        operation: &'static str,
        message: String,
    },

    /// Logical misuse, e.g. acting on a counter that never loaded.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The runtime dropped a pending persist before it settled.
    #[error("Pending persist was dropped before it settled")]
    Cancelled,
}

impl CounterError {
    pub fn transient(operation: &'static str, message: impl Into<String>) -> Self {
        CounterError::TransientIo {
            operation,
            message: message.into(),
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, CounterError::TransientIo { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_message_names_operation() {
        let err = CounterError::transient("persist", "connection reset");
        assert_eq!(
            err.to_string(),
            "Transient I/O error during persist: connection reset"
        );
        assert!(err.is_transient());
    }

    #[test]
    fn test_invalid_state_is_not_transient() {
        let err = CounterError::InvalidState("counter not loaded".to_string());
        assert!(!err.is_transient());
    }
}
