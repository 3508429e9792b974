//! Linear models for regression.
//!
//! Ordinary Least Squares over 2D samples, solved in closed form through
//! the correlation identity rather than normal equations:
//!
//! ```text
//! a = ρ(X, Y) · σ_Y / σ_X
//! b = ȳ − a·x̄
//! ```

use crate::error::{PlanoError, Result};
use crate::sample::{xs, ys, Sample};
use crate::stats::{correlation, mean, std_dev};
use serde::{Deserialize, Serialize};

/// Ordinary Least Squares (OLS) line fit `y = a·x + b`.
///
/// # Degenerate inputs
///
/// When every x (or every y) is identical the correlation is NaN and the
/// fitted coefficients come out non-finite. That is surfaced through
/// [`LinearRegression::slope`]/[`LinearRegression::intercept`] rather than
/// clamped; check `slope().is_finite()` before drawing the line.
///
/// # Examples
///
/// ```
/// use plano::linear_model::LinearRegression;
/// use plano::sample::Sample;
///
/// // y = 2x + 1
/// let samples: Vec<Sample> = (0..4)
///     .map(|i| Sample::new(f64::from(i), 2.0 * f64::from(i) + 1.0))
///     .collect();
///
/// let mut model = LinearRegression::new();
/// model.fit(&samples).unwrap();
/// assert!((model.slope() - 2.0).abs() < 1e-12);
/// assert!((model.intercept() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinearRegression {
    coefficients: Option<(f64, f64)>,
}

impl LinearRegression {
    /// Creates a new, unfitted `LinearRegression`.
    #[must_use]
    pub fn new() -> Self {
        Self { coefficients: None }
    }

    /// Fits the line by the closed-form correlation solution.
    ///
    /// # Errors
    ///
    /// Returns [`PlanoError::InsufficientSamples`] when fewer than two
    /// samples are given; a line through fewer points is underdetermined.
    pub fn fit(&mut self, samples: &[Sample]) -> Result<()> {
        if samples.len() < 2 {
            return Err(PlanoError::InsufficientSamples {
                required: 2,
                actual: samples.len(),
            });
        }

        let x = xs(samples);
        let y = ys(samples);

        let rho = correlation(samples);
        let a = rho * std_dev(&y) / std_dev(&x);
        let b = mean(&y) - a * mean(&x);

        self.coefficients = Some((a, b));
        Ok(())
    }

    /// Returns true if the model has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }

    /// Slope `a` of the fitted line.
    ///
    /// # Panics
    ///
    /// Panics if the model is not fitted.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.coefficients
            .expect("Model not fitted. Call fit() first.")
            .0
    }

    /// Intercept `b` of the fitted line.
    ///
    /// # Panics
    ///
    /// Panics if the model is not fitted.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.coefficients
            .expect("Model not fitted. Call fit() first.")
            .1
    }

    /// Predicts `y` for the given `x`.
    ///
    /// # Panics
    ///
    /// Panics if the model is not fitted.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope() * x + self.intercept()
    }

    /// Residual sum of squares `Σ (y − a·x − b)²` over the given samples.
    ///
    /// # Panics
    ///
    /// Panics if the model is not fitted.
    #[must_use]
    pub fn sum_squared_error(&self, samples: &[Sample]) -> f64 {
        samples
            .iter()
            .map(|s| {
                let r = s.y - self.predict(s.x);
                r * r
            })
            .sum()
    }
}
