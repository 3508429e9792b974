//! Principal Component Analysis over 2D samples.
//!
//! PCA here is the 2D special case: the covariance matrix is 2×2, its
//! eigen-decomposition is closed-form, and "reducing" the data means
//! projecting every sample onto the dominant eigenvector.
//!
//! # Example
//!
//! ```
//! use plano::decomposition::Pca;
//! use plano::sample::Sample;
//!
//! // Points stretched along y = x.
//! let samples: Vec<Sample> = (0..5)
//!     .map(|i| Sample::new(f64::from(i), f64::from(i) + 0.1))
//!     .collect();
//!
//! let mut pca = Pca::new();
//! pca.fit(&samples).unwrap();
//!
//! let axis = pca.axis();
//! // The dominant axis has slope ~1.
//! assert!((axis[1] / axis[0] - 1.0).abs() < 0.05);
//! ```

use crate::error::{PlanoError, Result};
use crate::matrix::{Eigen, Matrix2x2};
use crate::sample::{Sample, xs, ys};
use crate::stats::{covariance, variance};
use serde::{Deserialize, Serialize};

/// Covariance matrix of a sample set:
///
/// ```text
/// [[Var(X),    Cov(X, Y)],
///  [Cov(X, Y), Var(Y)   ]]
/// ```
///
/// Returns the zero matrix for an empty set, so the downstream
/// eigen-decomposition yields the all-zero sentinel instead of NaN.
#[must_use]
pub fn covariance_matrix(samples: &[Sample]) -> Matrix2x2 {
    if samples.is_empty() {
        return Matrix2x2::ZERO;
    }
    let cov = covariance(samples);
    Matrix2x2::new(variance(&xs(samples)), cov, cov, variance(&ys(samples)))
}

/// Principal Component Analysis reducing 2D samples to one dimension.
///
/// Fitting computes the covariance matrix and its eigen-decomposition; the
/// principal axis is the eigenvector of the larger eigenvalue, scaled so its
/// length equals that eigenvalue (see [`Eigen`]). Transforming projects each
/// sample onto that axis by dot product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pca {
    fitted: Option<(Matrix2x2, Eigen)>,
}

impl Pca {
    /// Creates a new, unfitted `Pca`.
    #[must_use]
    pub fn new() -> Self {
        Self { fitted: None }
    }

    /// Fits the decomposition to the sample set.
    ///
    /// # Errors
    ///
    /// Returns [`PlanoError::InsufficientSamples`] for an empty set; a
    /// covariance structure needs at least one point.
    pub fn fit(&mut self, samples: &[Sample]) -> Result<()> {
        if samples.is_empty() {
            return Err(PlanoError::InsufficientSamples {
                required: 1,
                actual: samples.len(),
            });
        }
        let matrix = covariance_matrix(samples);
        self.fitted = Some((matrix, matrix.eigen()));
        Ok(())
    }

    /// Returns true if the decomposition has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// The fitted covariance matrix.
    ///
    /// # Panics
    ///
    /// Panics if the decomposition is not fitted.
    #[must_use]
    pub fn covariance(&self) -> Matrix2x2 {
        self.fitted
            .expect("Model not fitted. Call fit() first.")
            .0
    }

    /// The fitted eigen-decomposition of the covariance matrix.
    ///
    /// # Panics
    ///
    /// Panics if the decomposition is not fitted.
    #[must_use]
    pub fn eigen(&self) -> Eigen {
        self.fitted
            .expect("Model not fitted. Call fit() first.")
            .1
    }

    /// The principal axis: the eigenvector of the larger eigenvalue.
    #[must_use]
    pub fn axis(&self) -> [f64; 2] {
        self.eigen().greater_eigenvector()
    }

    /// Projects every sample onto the principal axis, returning the scalar
    /// coordinate `t = v · (x, y)` of each.
    #[must_use]
    pub fn transform(&self, samples: &[Sample]) -> Vec<f64> {
        let [ax, ay] = self.axis();
        samples.iter().map(|s| ax * s.x + ay * s.y).collect()
    }

    /// Projects every sample onto the principal axis and lays the results
    /// on the x axis as new samples at `(t, 0)`.
    ///
    /// Each projected sample keeps its source's category and color, faded
    /// to distinguish projections from the originals.
    #[must_use]
    pub fn project(&self, samples: &[Sample]) -> Vec<Sample> {
        self.transform(samples)
            .iter()
            .zip(samples.iter())
            .map(|(&t, source)| {
                let mut projected = *source;
                projected.move_to(t, 0.0);
                projected.color = source.color.faded(130);
                projected
            })
            .collect()
    }
}
