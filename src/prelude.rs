//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use plano::prelude::*;
//! ```

pub use crate::classification::{KNearestNeighbors, LogisticRegression, Neighborhood};
pub use crate::decomposition::{covariance_matrix, Pca};
pub use crate::error::{PlanoError, Result};
pub use crate::linear_model::LinearRegression;
pub use crate::matrix::{Eigen, Matrix2x2};
pub use crate::sample::{Color, Sample, SAMPLE_COLORS};
pub use crate::stats::{correlation, covariance, mean, std_dev, variance};
