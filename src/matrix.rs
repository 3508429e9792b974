//! 2×2 matrix algebra with closed-form eigen-decomposition.
//!
//! [`Matrix2x2`] is an immutable `Copy` value: change a coefficient by
//! constructing a new value, and compute the eigen-decomposition as a pure
//! function of it via [`Matrix2x2::eigen`]. There is no cached derived
//! state to go stale.

use crate::sample::Sample;
use serde::{Deserialize, Serialize};

/// A 2×2 real matrix `[[a, b], [c, d]]`.
///
/// # Examples
///
/// ```
/// use plano::matrix::Matrix2x2;
///
/// let m = Matrix2x2::new(2.0, 0.0, 0.0, 3.0);
/// assert_eq!(m.det(), 6.0);
/// assert_eq!(m.trace(), 5.0);
///
/// let eig = m.eigen();
/// assert_eq!((eig.lambda1, eig.lambda2), (2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix2x2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// Real eigenvalues and eigenvectors of a [`Matrix2x2`].
///
/// Eigenvectors are scaled so that `|v_i| = |lambda_i|`, not unit length:
/// callers draw eigenvectors scaled by their eigenvalue. Eigenvalues are
/// ordered `lambda1 <= lambda2`.
///
/// For the zero matrix, or when the eigenvalues would be complex
/// (`trace² < 4·det`), every field is 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Eigen {
    /// Eigenvector paired with `lambda1`.
    pub v1: [f64; 2],
    /// Eigenvector paired with `lambda2`.
    pub v2: [f64; 2],
    /// Smaller eigenvalue.
    pub lambda1: f64,
    /// Larger eigenvalue.
    pub lambda2: f64,
}

impl Eigen {
    /// The all-zero sentinel returned for zero matrices and complex spectra.
    pub const ZERO: Eigen = Eigen {
        v1: [0.0, 0.0],
        v2: [0.0, 0.0],
        lambda1: 0.0,
        lambda2: 0.0,
    };

    /// True if this is the all-zero sentinel.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Eigen::ZERO
    }

    /// The eigenvector paired with the larger eigenvalue.
    #[must_use]
    pub fn greater_eigenvector(&self) -> [f64; 2] {
        if self.lambda1 > self.lambda2 {
            self.v1
        } else {
            self.v2
        }
    }

    /// Slope of the line spanned by the greater eigenvector.
    ///
    /// Infinite or NaN when that eigenvector's x component is 0.
    #[must_use]
    pub fn slope_of_greater(&self) -> f64 {
        let [x, y] = self.greater_eigenvector();
        y / x
    }
}

impl Matrix2x2 {
    /// The zero matrix.
    pub const ZERO: Matrix2x2 = Matrix2x2 {
        a: 0.0,
        b: 0.0,
        c: 0.0,
        d: 0.0,
    };

    /// Creates the matrix `[[a, b], [c, d]]`.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Determinant `ad − bc`.
    #[must_use]
    pub fn det(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Trace `a + d`.
    #[must_use]
    pub fn trace(&self) -> f64 {
        self.a + self.d
    }

    /// Transpose (swap b and c).
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::new(self.a, self.c, self.b, self.d)
    }

    /// Inverse, or the zero matrix when singular.
    #[must_use]
    pub fn inverse(&self) -> Self {
        if self.is_singular() {
            return Matrix2x2::ZERO;
        }
        let det = self.det();
        Self::new(self.d / det, -self.b / det, -self.c / det, self.a / det)
    }

    /// Applies the matrix to a sample's coordinates: `A · v`.
    ///
    /// Category and colors are carried over from the input.
    #[must_use]
    pub fn project(&self, v: &Sample) -> Sample {
        let mut out = *v;
        out.move_to(self.a * v.x + self.b * v.y, self.c * v.x + self.d * v.y);
        out
    }

    /// True if every coefficient is exactly 0.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.a == 0.0 && self.b == 0.0 && self.c == 0.0 && self.d == 0.0
    }

    /// True if the determinant is exactly 0.
    #[must_use]
    pub fn is_singular(&self) -> bool {
        self.det() == 0.0
    }

    /// True if the matrix is close enough to singular that grid-like
    /// visualizations degenerate: small determinant, a near-zero basis
    /// vector, or two nearly parallel basis vectors.
    #[must_use]
    pub fn is_almost_singular(&self) -> bool {
        let Matrix2x2 { a, b, c, d } = *self;
        self.det().abs() < 0.03
            || ((a * b + c * d) / ((a * a + c * c).sqrt() * (b * b + d * d).sqrt())).abs() > 0.999
            || a * a + c * c < 0.01
            || b * b + d * d < 0.01
    }

    /// Closed-form real eigen-decomposition.
    ///
    /// Returns [`Eigen::ZERO`] for the zero matrix and whenever
    /// `trace² < 4·det` (complex eigenvalues). Otherwise:
    ///
    /// ```text
    /// delta   = sqrt(trace² − 4·det)
    /// lambda1 = (trace − delta) / 2      lambda1 <= lambda2
    /// lambda2 = (trace + delta) / 2
    /// ```
    ///
    /// Each eigenvector starts from `(1, (λ−a)/b)` and is rescaled so its
    /// length equals `|λ|`. When `b == 0` that expression divides by zero
    /// and the vectors come out NaN; this is left unguarded on purpose.
    /// Callers with axis-aligned matrices read the eigenvalues and know the
    /// eigenvectors lie on the axes.
    #[must_use]
    pub fn eigen(&self) -> Eigen {
        let trace = self.trace();
        let det = self.det();

        if trace * trace < 4.0 * det || self.is_zero() {
            return Eigen::ZERO;
        }

        let delta = (trace * trace - 4.0 * det).sqrt();
        let lambda1 = (trace - delta) / 2.0;
        let lambda2 = (trace + delta) / 2.0;

        let len1 = (1.0 + ((lambda1 - self.a) / self.b).powi(2)).sqrt();
        let len2 = (1.0 + ((lambda2 - self.a) / self.b).powi(2)).sqrt();

        Eigen {
            v1: [
                lambda1 / len1,
                lambda1 * (lambda1 - self.a) / (self.b * len1),
            ],
            v2: [
                lambda2 / len2,
                lambda2 * (lambda2 - self.a) / (self.b * len2),
            ],
            lambda1,
            lambda2,
        }
    }
}
