//! Plano: machine-learning primitives for labeled 2D point sets.
//!
//! Plano implements the numeric core behind interactive ML visualizations:
//! every algorithm consumes a collection of [`sample::Sample`] points in the
//! plane and produces coefficients, predictions, or projections a rendering
//! layer can draw directly.
//!
//! # Quick Start
//!
//! ```
//! use plano::prelude::*;
//!
//! // Training data on the line y = 2x + 1.
//! let samples: Vec<Sample> = (0..4)
//!     .map(|i| Sample::new(f64::from(i), 2.0 * f64::from(i) + 1.0))
//!     .collect();
//!
//! // Fit a regression line.
//! let mut model = LinearRegression::new();
//! model.fit(&samples).unwrap();
//!
//! assert!((model.slope() - 2.0).abs() < 1e-12);
//! assert!((model.predict(10.0) - 21.0).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! - [`sample`]: Labeled 2D points and display colors
//! - [`stats`]: Descriptive statistics (mean, variance, covariance, correlation)
//! - [`matrix`]: 2×2 matrix algebra with closed-form eigen-decomposition
//! - [`linear_model`]: Ordinary Least Squares line fitting
//! - [`classification`]: Logistic regression (SGD) and k-Nearest Neighbors
//! - [`decomposition`]: Principal Component Analysis

pub mod classification;
pub mod decomposition;
pub mod error;
pub mod linear_model;
pub mod matrix;
pub mod prelude;
pub mod sample;
pub mod stats;
