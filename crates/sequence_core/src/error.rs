//! Error types for sequence generation.

use thiserror::Error;

/// Failures raised while selecting or advancing a sequence source.
///
/// Only index-coupled sources can fail to advance; white noise, blue noise
/// and the golden ratio recurrence are unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The draw index exceeds the integer width the construction supports.
    #[error("Sequence range exceeded: draw index {index} is not below the limit {limit}")]
    RangeExceeded {
        /// The rejected draw index.
        index: u64,
        /// First unsupported index.
        limit: u64,
    },

    /// A mode identifier did not name any sequence.
    #[error("Unknown sequence mode: {0}. Must be one of: white, blue, golden, sobol")]
    UnknownMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_exceeded_display() {
        let err = SequenceError::RangeExceeded {
            index: 1 << 31,
            limit: 1 << 31,
        };
        let message = err.to_string();
        assert!(message.contains("Sequence range exceeded"));
        assert!(message.contains("2147483648"));
    }
}
