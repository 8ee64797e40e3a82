//! Error types for lrucache

use thiserror::Error;

/// Result type alias for lrucache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Capacity was zero or negative
    #[error("invalid storage size {0}, must provide a positive value")]
    InvalidCapacity(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCapacity(0);
        assert_eq!(
            err.to_string(),
            "invalid storage size 0, must provide a positive value"
        );

        let err = Error::InvalidCapacity(-3);
        assert!(err.to_string().contains("-3"));
    }
}
