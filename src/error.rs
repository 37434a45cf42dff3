//! Error type for configuration and the benchmark driver
//!
//! The multiplication kernels themselves are infallible; errors only arise
//! when building a configuration or when the driver talks to the outside.

use thiserror::Error;

/// Errors produced by `sparsebench`
#[derive(Debug, Error)]
pub enum Error {
    /// A worker count of zero was requested
    #[error("invalid worker count {0}: at least one worker is required")]
    InvalidWorkerCount(usize),

    /// The matrix size could not be parsed as a non-negative integer
    #[error("invalid matrix size {0:?}: expected a non-negative integer")]
    InvalidSize(String),

    /// Reading the interactive size from stdin failed
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Two multiplication strategies produced different products
    #[error("verification failed: {left} and {right} disagree")]
    VerificationFailed {
        left: &'static str,
        right: &'static str,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::InvalidWorkerCount(0);
        assert_eq!(
            err.to_string(),
            "invalid worker count 0: at least one worker is required"
        );

        let err = Error::InvalidSize("abc".to_string());
        assert!(err.to_string().contains("\"abc\""));

        let err = Error::VerificationFailed {
            left: "coo",
            right: "coo-parallel",
        };
        assert_eq!(
            err.to_string(),
            "verification failed: coo and coo-parallel disagree"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "failed to read input: stdin closed");
    }
}
