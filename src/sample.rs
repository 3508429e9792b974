//! Labeled 2D points and their display colors.
//!
//! A [`Sample`] is the unit of data every algorithm in this crate consumes:
//! a point in the plane plus an integer category. Category 0 marks a
//! *neutral* sample, i.e. an unlabeled point that classifiers annotate with
//! a prediction. Categories 1.. are training labels; binary models use
//! {1, 2}, k-NN accepts 1..=6.

use serde::{Deserialize, Serialize};

/// An RGBA display color attached to samples.
///
/// The numeric core never interprets colors; it only copies them around so
/// a rendering layer can draw predictions without a palette lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Returns the same color with a different alpha.
    #[must_use]
    pub const fn faded(self, alpha: u8) -> Self {
        Self { a: alpha, ..self }
    }

    /// Neutral gray, the color of unlabeled samples.
    pub const GRAY: Color = Color::rgb(130, 130, 130);
    /// Category 1.
    pub const LIGHT_BLUE: Color = Color::rgb(100, 100, 255);
    /// Category 2.
    pub const LIGHT_RED: Color = Color::rgb(255, 100, 100);
    /// Category 3.
    pub const LIGHT_GREEN: Color = Color::rgb(100, 255, 100);
    /// Category 4.
    pub const OLIVE: Color = Color::rgb(200, 200, 50);
    /// Category 5.
    pub const MAGENTA: Color = Color::rgb(200, 50, 200);
    /// Category 6.
    pub const CYAN: Color = Color::rgb(50, 200, 200);
}

/// Display colors indexed by category: `SAMPLE_COLORS[0]` is the neutral
/// gray, `SAMPLE_COLORS[c]` the color of category `c` for c in 1..=6.
pub const SAMPLE_COLORS: [Color; 7] = [
    Color::GRAY,
    Color::LIGHT_BLUE,
    Color::LIGHT_RED,
    Color::LIGHT_GREEN,
    Color::OLIVE,
    Color::MAGENTA,
    Color::CYAN,
];

/// A 2D point with an integer category label.
///
/// Invariants: `category` is a non-negative integer (0 = neutral); `x` and
/// `y` are finite reals. The core reads collections of samples and returns
/// derived values; it creates or destroys samples only when the caller asks
/// for projections.
///
/// # Examples
///
/// ```
/// use plano::sample::Sample;
///
/// let s = Sample::new(1.0, 2.0).with_category(2);
/// assert_eq!(s.category, 2);
/// assert!(!s.is_neutral());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    /// 0 = neutral (subject to prediction), 1.. = training label.
    pub category: usize,
    /// Display color, follows the category palette unless overridden.
    pub color: Color,
    /// Color assigned by a classifier; gray until a prediction is made.
    pub predicted_color: Color,
    /// Category assigned by a classifier, if any prediction was made.
    pub predicted_category: Option<usize>,
}

impl Sample {
    /// Creates a labeled sample of category 1 at `(x, y)`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            category: 1,
            color: SAMPLE_COLORS[1],
            predicted_color: Color::GRAY,
            predicted_category: None,
        }
    }

    /// Creates a neutral (unlabeled) sample at `(x, y)`.
    #[must_use]
    pub fn neutral(x: f64, y: f64) -> Self {
        Self::new(x, y).with_category(0)
    }

    /// Sets the category and refreshes the display color from the palette.
    ///
    /// Categories beyond the palette keep their previous color.
    #[must_use]
    pub fn with_category(mut self, category: usize) -> Self {
        self.set_category(category);
        self
    }

    /// Overrides the display color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Re-labels the sample, refreshing its color from the palette.
    pub fn set_category(&mut self, category: usize) {
        self.category = category;
        if let Some(&color) = SAMPLE_COLORS.get(category) {
            self.color = color;
        }
    }

    /// True if the sample is unlabeled and eligible for prediction.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.category == 0
    }

    /// Moves the sample by the vector `(dx, dy)`.
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Moves the sample to `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Euclidean distance to another sample.
    #[must_use]
    pub fn distance_to(&self, other: &Sample) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// The coordinates as a pair, for dot products against axes.
    #[must_use]
    pub fn values(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// Collects the x coordinates of all samples.
#[must_use]
pub fn xs(samples: &[Sample]) -> Vec<f64> {
    samples.iter().map(|s| s.x).collect()
}

/// Collects the y coordinates of all samples.
#[must_use]
pub fn ys(samples: &[Sample]) -> Vec<f64> {
    samples.iter().map(|s| s.y).collect()
}

/// Moves every sample by the vector `(dx, dy)`.
pub fn move_all(samples: &mut [Sample], dx: f64, dy: f64) {
    for sample in samples {
        sample.move_by(dx, dy);
    }
}

/// Translates all samples so their mean lands at the origin.
///
/// Returns the `(mean_x, mean_y)` that was subtracted so the caller can
/// undo the shift.
pub fn zero_center_samples(samples: &mut [Sample]) -> (f64, f64) {
    let mean_x = crate::stats::mean(&xs(samples));
    let mean_y = crate::stats::mean(&ys(samples));
    move_all(samples, -mean_x, -mean_y);
    (mean_x, mean_y)
}
