//! Classification over labeled 2D samples.
//!
//! - [`LogisticRegression`]: a 2-input linear classifier with sigmoid
//!   activation, trained by pure stochastic gradient descent.
//! - [`KNearestNeighbors`]: brute-force nearest-neighbor search with
//!   majority voting and shrink-k tie-breaking.
//!
//! Both consume the full sample collection and interpret categories the
//! same way: 0 is neutral (to be predicted), 1.. are training labels.
//!
//! # Example
//!
//! ```
//! use plano::classification::LogisticRegression;
//! use plano::sample::Sample;
//!
//! let samples = vec![
//!     Sample::new(-2.0, -2.0).with_category(1),
//!     Sample::new(-2.5, -1.5).with_category(1),
//!     Sample::new(2.0, 2.0).with_category(2),
//!     Sample::new(1.5, 2.5).with_category(2),
//! ];
//!
//! let mut model = LogisticRegression::new()
//!     .with_epochs(500)
//!     .with_learning_rate(0.5)
//!     .with_random_state(42);
//! model.fit(&samples).unwrap();
//!
//! assert_eq!(model.predict(2.0, 2.0), 2);
//! assert_eq!(model.predict(-2.0, -2.0), 1);
//! ```

use crate::error::{PlanoError, Result};
use crate::sample::{xs, ys, Sample, SAMPLE_COLORS};
use crate::stats::mean;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Sigmoid activation: σ(z) = 1 / (1 + e^(−z)).
#[must_use]
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Derivative of the sigmoid: σ'(z) = σ(z)·(1 − σ(z)).
#[must_use]
pub fn sigmoid_prime(z: f64) -> f64 {
    sigmoid(z) * (1.0 - sigmoid(z))
}

/// True if the sample set contains at least one sample of category 1 and
/// one of category 2, the precondition for fitting a binary classifier.
#[must_use]
pub fn two_classes_exist(samples: &[Sample]) -> bool {
    let mut pos = false;
    let mut neg = false;
    for sample in samples {
        match sample.category {
            1 => pos = true,
            2 => neg = true,
            _ => {}
        }
        if pos && neg {
            return true;
        }
    }
    false
}

/// Logistic regression for binary classification of 2D samples.
///
/// Training data is the subset of samples with category 1 or 2; category 1
/// maps to target 0 and category 2 to target 1. Fitting zero-centers a
/// working copy of that subset for numerical conditioning, runs `epochs`
/// passes of batch-size-1 SGD with a fresh shuffle each pass, then folds
/// the centering back into the bias so the returned weights are valid in
/// original coordinates.
///
/// Weights start from the fixed values `wx = 0.1, wy = −0.1, bias = 0.2`
/// rather than random draws, so repeated fits over identical input with
/// the same seed trace the same trajectory and the decision boundary does
/// not jump between runs.
///
/// There is no convergence check; `epochs` is the sole stopping criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// Fitted weights `(wx, wy)`.
    weights: Option<(f64, f64)>,
    /// Fitted bias in original (uncentered) coordinates.
    bias: f64,
    /// Number of SGD passes over the training subset.
    epochs: usize,
    /// Step size `eta` for each weight update.
    learning_rate: f64,
    /// Seed for the per-epoch shuffle; `None` uses thread randomness.
    random_state: Option<u64>,
}

impl LogisticRegression {
    /// Creates a classifier with 100 epochs and eta = 0.1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: None,
            bias: 0.0,
            epochs: 100,
            learning_rate: 0.1,
            random_state: None,
        }
    }

    /// Sets the number of SGD passes.
    #[must_use]
    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    /// Sets the learning rate (eta).
    #[must_use]
    pub fn with_learning_rate(mut self, eta: f64) -> Self {
        self.learning_rate = eta;
        self
    }

    /// Sets the random seed for the per-epoch shuffle, making training
    /// fully reproducible.
    #[must_use]
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    /// Fits the classifier by stochastic gradient descent.
    ///
    /// # Errors
    ///
    /// Returns an error if `epochs` is 0, `eta` is not positive, or the
    /// sample set does not contain both categories 1 and 2.
    pub fn fit(&mut self, samples: &[Sample]) -> Result<()> {
        if self.epochs == 0 {
            return Err(PlanoError::InvalidHyperparameter {
                param: "epochs".to_string(),
                value: "0".to_string(),
                constraint: ">= 1".to_string(),
            });
        }
        if self.learning_rate <= 0.0 {
            return Err(PlanoError::InvalidHyperparameter {
                param: "eta".to_string(),
                value: format!("{}", self.learning_rate),
                constraint: "> 0".to_string(),
            });
        }

        if !two_classes_exist(samples) {
            return Err("Training data must contain samples of categories 1 and 2".into());
        }

        // Working copy of the training subset; the caller's samples are
        // never moved.
        let mut training: Vec<Sample> = samples
            .iter()
            .filter(|s| s.category == 1 || s.category == 2)
            .copied()
            .collect();

        let mean_x = mean(&xs(&training));
        let mean_y = mean(&ys(&training));
        crate::sample::move_all(&mut training, -mean_x, -mean_y);

        let mut wx = 0.1;
        let mut wy = -0.1;
        let mut bias = 0.2;

        let mut rng: StdRng = match self.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let eta = self.learning_rate;
        for _ in 0..self.epochs {
            // Visit order changes the SGD trajectory; reshuffle every pass.
            training.shuffle(&mut rng);

            for sample in &training {
                let input = wx * sample.x + wy * sample.y + bias;
                let output = sigmoid(input);
                let target = (sample.category - 1) as f64;
                let error = eta * (target - output) * sigmoid_prime(input);

                wx += error * sample.x;
                wy += error * sample.y;
                bias += error;
            }
        }

        // Undo the zero-centering so the bias is valid in the original
        // coordinates.
        self.weights = Some((wx, wy));
        self.bias = bias - (wx * mean_x + wy * mean_y);
        Ok(())
    }

    /// Returns true if the model has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.weights.is_some()
    }

    /// Fitted weights `(wx, wy)`.
    ///
    /// # Panics
    ///
    /// Panics if the model is not fitted.
    #[must_use]
    pub fn weights(&self) -> (f64, f64) {
        self.weights.expect("Model not fitted. Call fit() first.")
    }

    /// Fitted bias term.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.bias
    }

    /// Raw linear response `wx·x + wy·y + bias`.
    #[must_use]
    pub fn decision_function(&self, x: f64, y: f64) -> f64 {
        let (wx, wy) = self.weights();
        wx * x + wy * y + self.bias
    }

    /// Probability that `(x, y)` belongs to category 2.
    #[must_use]
    pub fn predict_proba(&self, x: f64, y: f64) -> f64 {
        sigmoid(self.decision_function(x, y))
    }

    /// Predicted category for `(x, y)`: 2 when the probability exceeds
    /// 0.5, otherwise 1.
    #[must_use]
    pub fn predict(&self, x: f64, y: f64) -> usize {
        if self.predict_proba(x, y) > 0.5 {
            2
        } else {
            1
        }
    }

    /// Coefficients `(a, b)` of the separating line `y = a·x + b`, where
    /// the decision function is zero.
    ///
    /// Non-finite when `wy == 0` (a vertical boundary).
    #[must_use]
    pub fn separation_line(&self) -> (f64, f64) {
        let (wx, wy) = self.weights();
        (-wx / wy, -self.bias / wy)
    }

    /// Annotates every neutral sample with its predicted category and the
    /// matching palette color. Labeled samples are untouched.
    pub fn predict_neutrals(&self, samples: &mut [Sample]) {
        for sample in samples.iter_mut().filter(|s| s.is_neutral()) {
            let category = self.predict(sample.x, sample.y);
            sample.predicted_category = Some(category);
            sample.predicted_color = SAMPLE_COLORS[category];
        }
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

/// One neutral sample's k-nearest-neighbors result.
///
/// Indices refer to the sample slice passed to
/// [`KNearestNeighbors::classify`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighborhood {
    /// Index of the neutral sample this result belongs to.
    pub neutral: usize,
    /// Indices of the neighbors, closest first.
    pub neighbors: Vec<usize>,
    /// Category that won the vote.
    pub category: usize,
    /// Distance from the neutral sample to its farthest neighbor.
    pub radius: f64,
}

/// K-Nearest Neighbors classifier over a mixed collection of labeled and
/// neutral samples.
///
/// Unlike an estimator that stores training data at fit time, this
/// classifier partitions the collection on every call: samples with a
/// nonzero category are the training set, category-0 samples are the
/// queries. Usable training categories are 1..=6; anything higher is
/// ignored by the vote.
///
/// # Example
///
/// ```
/// use plano::classification::KNearestNeighbors;
/// use plano::sample::Sample;
///
/// let samples = vec![
///     Sample::new(0.0, 0.0).with_category(1),
///     Sample::new(0.0, 1.0).with_category(1),
///     Sample::new(5.0, 5.0).with_category(2),
///     Sample::neutral(0.5, 0.5),
/// ];
///
/// let knn = KNearestNeighbors::new(3);
/// let results = knn.classify(&samples);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].category, 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KNearestNeighbors {
    k: usize,
}

/// Number of vote buckets; categories 1..=MAX_CATEGORIES participate.
const MAX_CATEGORIES: usize = 6;

impl KNearestNeighbors {
    /// Creates a classifier voting among the `k` nearest neighbors.
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Number of neighbors used for voting.
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Classifies every neutral sample in the collection.
    ///
    /// For each neutral sample, sorts the training samples by Euclidean
    /// distance (ties keep input order), keeps the nearest
    /// `min(k, n_training)`, and majority-votes their categories. A tied
    /// vote retries with one neighbor fewer until a unique winner emerges
    /// or `k` reaches 0.
    ///
    /// Neutral samples are skipped entirely when there are no training
    /// samples, when `k == 0`, or when the vote exhausts `k` without a
    /// unique winner (every neighbor's category outside the vote range):
    /// no [`Neighborhood`] is produced for them.
    #[must_use]
    pub fn classify(&self, samples: &[Sample]) -> Vec<Neighborhood> {
        let training: Vec<usize> = (0..samples.len())
            .filter(|&i| !samples[i].is_neutral())
            .collect();

        let mut results = Vec::new();

        for neutral in (0..samples.len()).filter(|&i| samples[i].is_neutral()) {
            let mut by_distance: Vec<(f64, usize)> = training
                .iter()
                .map(|&t| (samples[neutral].distance_to(&samples[t]), t))
                .collect();
            // Stable sort, so equidistant training samples keep their
            // input order.
            by_distance.sort_by(|a, b| {
                a.0.partial_cmp(&b.0)
                    .expect("sample coordinates are finite, distances are not NaN")
            });

            let neighbors: Vec<usize> = by_distance
                .iter()
                .take(self.k.min(by_distance.len()))
                .map(|&(_, t)| t)
                .collect();

            if neighbors.is_empty() {
                continue;
            }

            let category = match vote(samples, &neighbors, self.k) {
                Some(category) => category,
                None => continue,
            };
            let farthest = *neighbors.last().expect("neighbors is non-empty");
            results.push(Neighborhood {
                neutral,
                neighbors,
                category,
                radius: samples[neutral].distance_to(&samples[farthest]),
            });
        }

        results
    }

    /// Writes the predicted category and palette color onto each neutral
    /// sample named by `results`.
    pub fn assign(samples: &mut [Sample], results: &[Neighborhood]) {
        for result in results {
            let sample = &mut samples[result.neutral];
            sample.predicted_category = Some(result.category);
            if let Some(&color) = SAMPLE_COLORS.get(result.category) {
                sample.predicted_color = color;
            }
        }
    }
}

/// Majority vote with shrink-k tie-breaking.
///
/// Counts the categories of the first `min(k, len)` neighbors into six
/// buckets; when the maximum count is shared, retries with `k − 1` until a
/// single winner remains or `k` reaches 0. `None` means no winner: that
/// happens only when every counted category falls outside the vote range,
/// leaving all buckets tied at zero at every `k`. `neighbors` must be
/// sorted closest first.
fn vote(samples: &[Sample], neighbors: &[usize], k: usize) -> Option<usize> {
    let mut k = k;
    while k > 0 {
        let mut counts = [0usize; MAX_CATEGORIES];
        for &t in neighbors.iter().take(k.min(neighbors.len())) {
            let category = samples[t].category;
            if let Some(slot) = counts.get_mut(category.wrapping_sub(1)) {
                *slot += 1;
            }
        }

        if let Some(bucket) = argmax_unique(&counts) {
            return Some(bucket + 1);
        }
        // Tie: shrink the neighborhood and revote.
        k -= 1;
    }
    None
}

/// Index of the strictly largest value, or `None` when the maximum is
/// shared by more than one entry.
fn argmax_unique(values: &[usize]) -> Option<usize> {
    let mut max = None;
    let mut max_index = 0;
    let mut tied = false;

    for (i, &value) in values.iter().enumerate() {
        match max {
            Some(m) if value < m => {}
            Some(m) if value == m => tied = true,
            _ => {
                max = Some(value);
                max_index = i;
                tied = false;
            }
        }
    }

    if tied {
        None
    } else {
        Some(max_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Color;

    fn separable_set() -> Vec<Sample> {
        vec![
            Sample::new(-2.0, -2.0).with_category(1),
            Sample::new(-2.5, -1.5).with_category(1),
            Sample::new(-1.5, -2.5).with_category(1),
            Sample::new(2.0, 2.0).with_category(2),
            Sample::new(2.5, 1.5).with_category(2),
            Sample::new(1.5, 2.5).with_category(2),
        ]
    }

    #[test]
    fn test_sigmoid_midpoint_and_limits() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!(sigmoid(20.0) > 0.999_999);
        assert!(sigmoid(-20.0) < 1e-6);
        // σ'(0) = 0.25 is the maximum of the derivative.
        assert!((sigmoid_prime(0.0) - 0.25).abs() < 1e-12);
        assert!(sigmoid_prime(5.0) < sigmoid_prime(0.0));
    }

    #[test]
    fn test_two_classes_exist() {
        assert!(two_classes_exist(&separable_set()));
        let one_class = vec![Sample::new(0.0, 0.0), Sample::new(1.0, 1.0)];
        assert!(!two_classes_exist(&one_class));
        assert!(!two_classes_exist(&[]));
        // Neutral samples do not count toward either class.
        let neutrals = vec![Sample::neutral(0.0, 0.0), Sample::new(1.0, 1.0).with_category(2)];
        assert!(!two_classes_exist(&neutrals));
    }

    #[test]
    fn test_logistic_separates_toy_clusters() {
        let samples = separable_set();
        let mut model = LogisticRegression::new()
            .with_epochs(500)
            .with_learning_rate(0.5)
            .with_random_state(7);
        model.fit(&samples).unwrap();

        for s in &samples {
            let p = model.predict_proba(s.x, s.y);
            if s.category == 2 {
                assert!(p > 0.5, "category 2 sample misclassified: p = {p}");
            } else {
                assert!(p <= 0.5, "category 1 sample misclassified: p = {p}");
            }
            assert_eq!(model.predict(s.x, s.y), s.category);
        }
    }

    #[test]
    fn test_logistic_deterministic_with_seed() {
        let samples = separable_set();

        let mut first = LogisticRegression::new()
            .with_epochs(50)
            .with_learning_rate(0.3)
            .with_random_state(42);
        first.fit(&samples).unwrap();

        let mut second = LogisticRegression::new()
            .with_epochs(50)
            .with_learning_rate(0.3)
            .with_random_state(42);
        second.fit(&samples).unwrap();

        assert_eq!(first.weights(), second.weights());
        assert_eq!(first.intercept(), second.intercept());
    }

    #[test]
    fn test_logistic_bias_valid_in_original_coordinates() {
        // Train on clusters far from the origin; the zero-centering must
        // be folded back so the boundary sits between them.
        let samples = vec![
            Sample::new(98.0, 98.0).with_category(1),
            Sample::new(99.0, 97.0).with_category(1),
            Sample::new(102.0, 102.0).with_category(2),
            Sample::new(101.0, 103.0).with_category(2),
        ];
        let mut model = LogisticRegression::new()
            .with_epochs(800)
            .with_learning_rate(0.5)
            .with_random_state(3);
        model.fit(&samples).unwrap();

        assert_eq!(model.predict(98.0, 98.0), 1);
        assert_eq!(model.predict(102.0, 102.0), 2);
    }

    #[test]
    fn test_logistic_ignores_other_categories() {
        let mut samples = separable_set();
        samples.push(Sample::neutral(0.0, 0.0));
        samples.push(Sample::new(50.0, 50.0).with_category(3));

        let mut with_extras = LogisticRegression::new()
            .with_epochs(50)
            .with_learning_rate(0.3)
            .with_random_state(9);
        with_extras.fit(&samples).unwrap();

        let mut without = LogisticRegression::new()
            .with_epochs(50)
            .with_learning_rate(0.3)
            .with_random_state(9);
        without.fit(&separable_set()).unwrap();

        assert_eq!(with_extras.weights(), without.weights());
        assert_eq!(with_extras.intercept(), without.intercept());
    }

    #[test]
    fn test_logistic_requires_both_classes() {
        let one_class = vec![
            Sample::new(0.0, 0.0).with_category(1),
            Sample::new(1.0, 1.0).with_category(1),
        ];
        let mut model = LogisticRegression::new();
        assert!(model.fit(&one_class).is_err());
        assert!(!model.is_fitted());
    }

    #[test]
    fn test_logistic_hyperparameter_validation() {
        let samples = separable_set();
        let mut zero_epochs = LogisticRegression::new().with_epochs(0);
        assert!(zero_epochs.fit(&samples).is_err());
        let mut bad_eta = LogisticRegression::new().with_learning_rate(-1.0);
        assert!(bad_eta.fit(&samples).is_err());
    }

    #[test]
    fn test_logistic_does_not_move_callers_samples() {
        let samples = separable_set();
        let before = samples.clone();
        let mut model = LogisticRegression::new().with_random_state(1);
        model.fit(&samples).unwrap();
        assert_eq!(samples, before);
    }

    #[test]
    fn test_separation_line_matches_decision_function() {
        let samples = separable_set();
        let mut model = LogisticRegression::new()
            .with_epochs(200)
            .with_learning_rate(0.5)
            .with_random_state(11);
        model.fit(&samples).unwrap();

        let (a, b) = model.separation_line();
        // Points on the line have decision value 0.
        for x in [-3.0, 0.0, 2.0] {
            let y = a * x + b;
            assert!(model.decision_function(x, y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_predict_neutrals_annotates_only_neutrals() {
        let mut samples = separable_set();
        samples.push(Sample::neutral(2.2, 2.1));
        samples.push(Sample::neutral(-2.2, -2.1));

        let mut model = LogisticRegression::new()
            .with_epochs(500)
            .with_learning_rate(0.5)
            .with_random_state(5);
        model.fit(&samples).unwrap();
        model.predict_neutrals(&mut samples);

        assert_eq!(samples[6].predicted_category, Some(2));
        assert_eq!(samples[6].predicted_color, Color::LIGHT_RED);
        assert_eq!(samples[7].predicted_category, Some(1));
        assert_eq!(samples[7].predicted_color, Color::LIGHT_BLUE);
        // Labeled samples keep their default prediction fields.
        assert_eq!(samples[0].predicted_category, None);
    }

    // --- k-NN ---

    #[test]
    fn test_argmax_unique() {
        assert_eq!(argmax_unique(&[2, 1, 0]), Some(0));
        assert_eq!(argmax_unique(&[0, 3, 1]), Some(1));
        assert_eq!(argmax_unique(&[2, 2, 1]), None);
        assert_eq!(argmax_unique(&[1, 2, 2]), None);
        assert_eq!(argmax_unique(&[2, 1, 2]), None);
        assert_eq!(argmax_unique(&[0, 0, 5]), Some(2));
    }

    #[test]
    fn test_knn_majority_vote() {
        // Neighbors of categories {1, 1, 2}: category 1 wins with k = 3.
        let samples = vec![
            Sample::new(1.0, 0.0).with_category(1),
            Sample::new(0.0, 1.0).with_category(1),
            Sample::new(2.0, 0.0).with_category(2),
            Sample::neutral(0.0, 0.0),
        ];
        let results = KNearestNeighbors::new(3).classify(&samples);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].category, 1);
        assert_eq!(results[0].neutral, 3);
        assert_eq!(results[0].neighbors.len(), 3);
    }

    #[test]
    fn test_knn_tie_shrinks_k() {
        // {1, 1, 2, 2} with k = 4 is a tie; the revote over the 3 nearest
        // {1, 1, 2} picks category 1.
        let samples = vec![
            Sample::new(1.0, 0.0).with_category(1),
            Sample::new(0.0, 1.0).with_category(1),
            Sample::new(1.5, 0.0).with_category(2),
            Sample::new(0.0, 2.0).with_category(2),
            Sample::neutral(0.0, 0.0),
        ];
        let results = KNearestNeighbors::new(4).classify(&samples);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].category, 1);
        assert_eq!(results[0].neighbors.len(), 4);
    }

    #[test]
    fn test_knn_neighbors_sorted_by_distance() {
        let samples = vec![
            Sample::new(3.0, 0.0).with_category(1),
            Sample::new(1.0, 0.0).with_category(2),
            Sample::new(2.0, 0.0).with_category(3),
            Sample::neutral(0.0, 0.0),
        ];
        let results = KNearestNeighbors::new(3).classify(&samples);
        assert_eq!(results[0].neighbors, vec![1, 2, 0]);
        assert!((results[0].radius - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_knn_k_larger_than_training() {
        let samples = vec![
            Sample::new(1.0, 0.0).with_category(2),
            Sample::neutral(0.0, 0.0),
        ];
        let results = KNearestNeighbors::new(10).classify(&samples);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].neighbors.len(), 1);
        assert_eq!(results[0].category, 2);
    }

    #[test]
    fn test_knn_no_training_samples_skips_neutrals() {
        let samples = vec![Sample::neutral(0.0, 0.0), Sample::neutral(1.0, 1.0)];
        let results = KNearestNeighbors::new(3).classify(&samples);
        assert!(results.is_empty());
    }

    #[test]
    fn test_knn_k_zero_produces_nothing() {
        let samples = vec![
            Sample::new(1.0, 0.0).with_category(1),
            Sample::neutral(0.0, 0.0),
        ];
        assert!(KNearestNeighbors::new(0).classify(&samples).is_empty());
    }

    #[test]
    fn test_knn_equidistant_ties_keep_input_order() {
        // Two training samples at the same distance: the earlier one in
        // the collection sorts first.
        let samples = vec![
            Sample::new(1.0, 0.0).with_category(2),
            Sample::new(-1.0, 0.0).with_category(1),
            Sample::neutral(0.0, 0.0),
        ];
        let results = KNearestNeighbors::new(1).classify(&samples);
        assert_eq!(results[0].neighbors, vec![0]);
        assert_eq!(results[0].category, 2);
    }

    #[test]
    fn test_knn_assign_writes_predictions() {
        let mut samples = vec![
            Sample::new(0.1, 0.0).with_category(3),
            Sample::neutral(0.0, 0.0),
        ];
        let knn = KNearestNeighbors::new(1);
        let results = knn.classify(&samples);
        KNearestNeighbors::assign(&mut samples, &results);

        assert_eq!(samples[1].predicted_category, Some(3));
        assert_eq!(samples[1].predicted_color, Color::LIGHT_GREEN);
        assert_eq!(samples[0].predicted_category, None);
    }

    #[test]
    fn test_knn_out_of_range_categories_yield_no_prediction() {
        // Every neighbor's category is above the vote range, so the vote
        // exhausts k without a winner and the neutral is skipped.
        let samples = vec![
            Sample::new(1.0, 0.0).with_category(7),
            Sample::neutral(0.0, 0.0),
        ];
        assert!(KNearestNeighbors::new(1).classify(&samples).is_empty());

        // A single in-range neighbor among out-of-range ones still wins.
        let mixed = vec![
            Sample::new(1.0, 0.0).with_category(9),
            Sample::new(2.0, 0.0).with_category(2),
            Sample::neutral(0.0, 0.0),
        ];
        let results = KNearestNeighbors::new(2).classify(&mixed);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].category, 2);
    }

    #[test]
    fn test_knn_six_categories_participate() {
        let mut samples: Vec<Sample> = (1..=6)
            .map(|c| Sample::new(c as f64, 0.0).with_category(c))
            .collect();
        samples.push(Sample::neutral(5.9, 0.0));
        // k = 1: the nearest is the category-6 sample.
        let results = KNearestNeighbors::new(1).classify(&samples);
        assert_eq!(results[0].category, 6);
    }
}
