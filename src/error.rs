//! Error types for plano operations.
//!
//! Degenerate numeric results (zero-variance correlation, eigenvectors of a
//! matrix with `b == 0`) are not errors: they propagate as non-finite floats
//! so callers can surface them. This type covers structural failures only.

use std::fmt;

/// Main error type for plano operations.
///
/// # Examples
///
/// ```
/// use plano::error::PlanoError;
///
/// let err = PlanoError::InsufficientSamples { required: 2, actual: 1 };
/// assert!(err.to_string().contains("at least 2"));
/// ```
#[derive(Debug)]
pub enum PlanoError {
    /// Not enough samples to fit the model.
    InsufficientSamples {
        /// Minimum number of samples required
        required: usize,
        /// Number of samples provided
        actual: usize,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for PlanoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanoError::InsufficientSamples { required, actual } => {
                write!(
                    f,
                    "Insufficient samples: need at least {required}, got {actual}"
                )
            }
            PlanoError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            PlanoError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PlanoError {}

impl From<&str> for PlanoError {
    fn from(msg: &str) -> Self {
        PlanoError::Other(msg.to_string())
    }
}

impl From<String> for PlanoError {
    fn from(msg: String) -> Self {
        PlanoError::Other(msg)
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, PlanoError>;
