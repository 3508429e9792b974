//! Descriptive statistics over coordinate sequences and sample sets.
//!
//! These are the population formulas (divide by n, not n − 1), matching the
//! quantities the rest of the crate is built on:
//!
//! ```text
//! Var(X)    = E[(X − EX)²]
//! Cov(X, Y) = E[(X − EX)(Y − EY)]
//! ρ(X, Y)   = Cov(X, Y) / (σ_X σ_Y)
//! ```
//!
//! Degenerate inputs follow a deliberate split: [`covariance`] returns 0.0
//! for an empty sample set (an explicit guard, so dependent computations
//! like the covariance matrix stay finite), while [`mean`], [`variance`]
//! and [`correlation`] let the 0/0 surface as NaN: a zero-variance axis is
//! something the caller must see, not something to mask.
//!
//! # Examples
//!
//! ```
//! use plano::sample::Sample;
//! use plano::stats::{correlation, covariance};
//!
//! let samples: Vec<Sample> = (0..5)
//!     .map(|i| Sample::new(f64::from(i), 2.0 * f64::from(i)))
//!     .collect();
//!
//! assert!(covariance(&samples) > 0.0);
//! assert!((correlation(&samples) - 1.0).abs() < 1e-12);
//! ```

use crate::sample::{xs, ys, Sample};

/// Mean of a sequence. NaN for empty input (0/0).
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance: `mean((x − mean)²)`. NaN for empty input.
#[must_use]
pub fn variance(values: &[f64]) -> f64 {
    let mu = mean(values);
    values.iter().map(|v| (v - mu) * (v - mu)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation: `sqrt(variance)`.
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Dot product of two equal-length sequences.
///
/// # Panics
///
/// Panics if the slices have different lengths.
#[must_use]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "dot product needs equal-length inputs");
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Subtracts the mean from every element so the new mean is exactly 0.
pub fn zero_center(values: &mut [f64]) {
    let mu = mean(values);
    for v in values {
        *v -= mu;
    }
}

/// Covariance between the x and y coordinates of a sample set.
///
/// Returns 0.0 for an empty set rather than propagating NaN into the
/// covariance matrix and eigen-decomposition built on top of it.
#[must_use]
pub fn covariance(samples: &[Sample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let mut x = xs(samples);
    let mut y = ys(samples);
    zero_center(&mut x);
    zero_center(&mut y);

    dot(&x, &y) / samples.len() as f64
}

/// Pearson correlation between the x and y coordinates of a sample set.
///
/// NaN when either axis has zero variance (all x equal or all y equal);
/// this degeneracy propagates to the caller unmasked.
#[must_use]
pub fn correlation(samples: &[Sample]) -> f64 {
    covariance(samples) / (std_dev(&xs(samples)) * std_dev(&ys(samples)))
}
