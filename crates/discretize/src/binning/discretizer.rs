//! The equal-width discretization estimator.

use bon::Builder;
use ndarray::Array2;

use crate::data::NumericMatrix;

use super::cuts::{equal_width_cut_points, lower_bound, CutPoints};
use super::features::FeatureIndices;
use super::zero::ZeroInterval;

// =============================================================================
// Errors
// =============================================================================

/// Errors from configuration, fitting, and transforming.
///
/// All of these are usage errors: they are raised synchronously at the point
/// of detection, before any state mutation, and a failed call never leaves a
/// partially updated estimator behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiscretizeError {
    #[error("invalid number of bins: got {got}, expected at least 2")]
    InvalidBinCount { got: usize },

    #[error("more categorical indices ({n_categorical}) than features ({n_features})")]
    TooManyCategoricalIndices {
        n_categorical: usize,
        n_features: usize,
    },

    #[error("duplicate or out-of-range categorical indices: {indices:?}")]
    InvalidCategoricalIndices { indices: Vec<usize> },

    #[error("discretizer must be fitted before use")]
    NotFitted,

    #[error("feature count mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
}

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the discretizer.
///
/// Use the builder pattern for configuration:
///
/// # Example
///
/// ```
/// use discretize::DiscretizerConfig;
///
/// // Simple: just the bin count
/// let config = DiscretizerConfig::from(8);
///
/// // Full control
/// let config = DiscretizerConfig::builder()
///     .n_bins(8)
///     .categorical_features(vec![0, 3])
///     .build();
/// ```
#[derive(Clone, Debug, Builder)]
#[builder(derive(Clone, Debug))]
pub struct DiscretizerConfig {
    /// Number of equal-width bins per continuous feature (default: 2).
    /// The interval widths are determined by the per-feature minimum and
    /// maximum of the fitting data. `fit` rejects values below 2.
    #[builder(default = 2)]
    pub n_bins: usize,

    /// Indices of categorical columns, which are carried through unbinned.
    /// When absent, every column is treated as continuous.
    pub categorical_features: Option<Vec<usize>>,
}

impl Default for DiscretizerConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<usize> for DiscretizerConfig {
    fn from(n_bins: usize) -> Self {
        Self::builder().n_bins(n_bins).build()
    }
}

// =============================================================================
// Fitted state
// =============================================================================

/// Everything `fit` learns. Replaced wholesale on re-fit.
#[derive(Debug, Clone)]
struct FittedModel {
    features: FeatureIndices,
    /// Per continuous feature, aligned with `features.continuous()`.
    mins: Vec<f64>,
    maxs: Vec<f64>,
    reduced: CutPoints,
    zero_intervals: Vec<ZeroInterval>,
    n_features: usize,
    n_bins: usize,
}

impl FittedModel {
    /// Rebuild the full sorted boundary sequence for one continuous feature.
    ///
    /// Reconstructed on every access rather than cached, so it can never
    /// drift from the stored encoding.
    fn full_cuts(&self, slot: usize) -> Vec<f64> {
        self.zero_intervals[slot].restore_cut_points(self.reduced.feature_cuts(slot))
    }
}

// =============================================================================
// Discretizer
// =============================================================================

/// Bins continuous features into equal-width intervals.
///
/// `fit` learns per-feature bin boundaries from sample data; `transform`
/// replaces each continuous value with its integer bin index, in
/// `[0, n_bins - 1]`, and moves categorical columns to the trailing output
/// positions (ascending original index order). Intervals are open below and
/// closed above.
///
/// The estimator is a two-state machine: configuration only, then
/// configuration plus fitted state after a successful [`fit`](Self::fit).
/// Transforming or reading fitted views beforehand yields
/// [`DiscretizeError::NotFitted`].
///
/// # Example
///
/// ```
/// use discretize::{DenseMatrix, Discretizer, DiscretizerConfig};
///
/// let x = DenseMatrix::from_rows(&[
///     vec![-3.0, 1.0, 0.0, 5.0],
///     vec![-2.0, 7.0, 8.0, 4.5],
///     vec![3.0, 3.0, 1.0, 4.0],
/// ])?;
///
/// let config = DiscretizerConfig::builder()
///     .n_bins(4)
///     .categorical_features(vec![2])
///     .build();
/// let mut discretizer = Discretizer::new(config);
///
/// let binned = discretizer.fit_transform(&x)?;
///
/// // Continuous columns become bin indices; the categorical column keeps
/// // its raw values and moves to the last position.
/// assert_eq!(binned.row(0).to_vec(), vec![0.0, 0.0, 3.0, 0.0]);
/// assert_eq!(binned.row(1).to_vec(), vec![0.0, 3.0, 1.0, 8.0]);
/// assert_eq!(binned.row(2).to_vec(), vec![3.0, 1.0, 0.0, 1.0]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Discretizer {
    config: DiscretizerConfig,
    fitted: Option<FittedModel>,
}

impl Discretizer {
    /// Create an unfitted discretizer.
    pub fn new(config: DiscretizerConfig) -> Self {
        Self {
            config,
            fitted: None,
        }
    }

    /// The configuration this estimator was created with.
    #[inline]
    pub fn config(&self) -> &DiscretizerConfig {
        &self.config
    }

    /// Whether a successful `fit` has run.
    #[inline]
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    fn fitted(&self) -> Result<&FittedModel, DiscretizeError> {
        self.fitted.as_ref().ok_or(DiscretizeError::NotFitted)
    }

    // =========================================================================
    // Fit
    // =========================================================================

    /// Learn per-feature bin boundaries from `x`.
    ///
    /// Computes each continuous column's `(min, max)`, partitions the range
    /// into `n_bins` equal-width intervals, and stores the boundaries in the
    /// reduced zero-interval encoding. Returns `self` for chaining.
    ///
    /// A failed fit leaves any previously fitted state untouched.
    ///
    /// # Errors
    ///
    /// - [`DiscretizeError::InvalidBinCount`] if `n_bins < 2`
    /// - [`DiscretizeError::TooManyCategoricalIndices`] /
    ///   [`DiscretizeError::InvalidCategoricalIndices`] for a bad
    ///   categorical index list
    pub fn fit<M: NumericMatrix>(&mut self, x: &M) -> Result<&mut Self, DiscretizeError> {
        let n_bins = self.config.n_bins;
        if n_bins < 2 {
            return Err(DiscretizeError::InvalidBinCount { got: n_bins });
        }

        let n_features = x.n_features();
        let features =
            FeatureIndices::resolve(n_features, self.config.categorical_features.as_deref())?;

        let ranges = x.column_ranges();
        let n_continuous = features.continuous().len();
        let mut mins = Vec::with_capacity(n_continuous);
        let mut maxs = Vec::with_capacity(n_continuous);
        let mut zero_intervals = Vec::with_capacity(n_continuous);
        let mut reduced_columns = Vec::with_capacity(n_continuous);

        for &feature in features.continuous() {
            let (min, max) = ranges[feature];
            let points = equal_width_cut_points(min, max, n_bins);
            let (interval, reduced) = ZeroInterval::encode(&points);
            mins.push(min);
            maxs.push(max);
            zero_intervals.push(interval);
            reduced_columns.push(reduced);
        }

        self.fitted = Some(FittedModel {
            features,
            mins,
            maxs,
            reduced: CutPoints::from_feature_columns(reduced_columns),
            zero_intervals,
            n_features,
            n_bins,
        });
        Ok(self)
    }

    // =========================================================================
    // Transform
    // =========================================================================

    /// Discretize `x` against the fitted boundaries.
    ///
    /// Each continuous value maps to the count of boundaries strictly below
    /// it. The output holds the discretized continuous columns first (in
    /// ascending original index order), then the untouched categorical
    /// columns (also ascending). Shape: `[n_samples, n_features]`.
    ///
    /// # Errors
    ///
    /// - [`DiscretizeError::NotFitted`] before a successful [`fit`](Self::fit)
    /// - [`DiscretizeError::ShapeMismatch`] if `x` has a different feature
    ///   count than the fitting data
    pub fn transform<M: NumericMatrix>(&self, x: &M) -> Result<Array2<f64>, DiscretizeError> {
        let model = self.fitted()?;
        if x.n_features() != model.n_features {
            return Err(DiscretizeError::ShapeMismatch {
                expected: model.n_features,
                got: x.n_features(),
            });
        }

        let n_samples = x.n_samples();
        let mut out = Array2::zeros((n_samples, model.n_features));
        let mut column = Vec::with_capacity(n_samples);

        for (slot, &feature) in model.features.continuous().iter().enumerate() {
            let cuts = model.full_cuts(slot);
            x.read_column(feature, &mut column);
            for (row, &value) in column.iter().enumerate() {
                out[[row, slot]] = lower_bound(&cuts, value) as f64;
            }
        }

        let n_continuous = model.features.continuous().len();
        for (offset, &feature) in model.features.sorted_categorical().iter().enumerate() {
            x.read_column(feature, &mut column);
            for (row, &value) in column.iter().enumerate() {
                out[[row, n_continuous + offset]] = value;
            }
        }

        Ok(out)
    }

    /// Fit to `x`, then transform it.
    pub fn fit_transform<M: NumericMatrix>(
        &mut self,
        x: &M,
    ) -> Result<Array2<f64>, DiscretizeError> {
        self.fit(x)?;
        self.transform(x)
    }

    // =========================================================================
    // Fitted views
    // =========================================================================

    /// Full reconstructed bin boundaries, one row per continuous feature.
    ///
    /// Shape: `[n_continuous_features, n_bins - 1]`. Rebuilt from the stored
    /// encoding on every call.
    pub fn cut_points(&self) -> Result<Array2<f64>, DiscretizeError> {
        let model = self.fitted()?;
        let n_continuous = model.features.continuous().len();
        let mut out = Array2::zeros((n_continuous, model.n_bins - 1));
        for slot in 0..n_continuous {
            for (k, &cut) in model.full_cuts(slot).iter().enumerate() {
                out[[slot, k]] = cut;
            }
        }
        Ok(out)
    }

    /// Per continuous feature, the interval that discretizes to zero.
    pub fn zero_intervals(&self) -> Result<&[ZeroInterval], DiscretizeError> {
        Ok(&self.fitted()?.zero_intervals)
    }

    /// Per continuous feature minimum seen at fit time.
    pub fn mins(&self) -> Result<&[f64], DiscretizeError> {
        Ok(&self.fitted()?.mins)
    }

    /// Per continuous feature maximum seen at fit time.
    pub fn maxs(&self) -> Result<&[f64], DiscretizeError> {
        Ok(&self.fitted()?.maxs)
    }

    /// Continuous feature indices, sorted ascending.
    pub fn continuous_features(&self) -> Result<&[usize], DiscretizeError> {
        Ok(self.fitted()?.features.continuous())
    }

    /// Feature count seen at fit time.
    pub fn n_features(&self) -> Result<usize, DiscretizeError> {
        Ok(self.fitted()?.n_features)
    }

    /// Number of continuous features, or `None` before fitting.
    pub fn n_continuous_features(&self) -> Option<usize> {
        self.fitted
            .as_ref()
            .map(|model| model.features.continuous().len())
    }
}
