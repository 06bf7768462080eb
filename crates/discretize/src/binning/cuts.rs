//! Equal-width bin boundaries and per-feature cut-point storage.

// ============================================================================
// Boundary computation
// ============================================================================

/// Compute the `n_bins - 1` interior boundaries of an equal-width partition
/// of `[min, max)` into `n_bins` bins.
///
/// The boundaries are `min + i * (max - min) / n_bins` for `i in 1..n_bins`,
/// strictly increasing for `min < max`. A constant feature (`min == max`)
/// degenerates to all boundaries equal to `min`.
///
/// Intervals follow the right-closed convention: a bin covers
/// `(lower, upper]`, open below except for the first bin and unbounded above
/// for the last.
pub(crate) fn equal_width_cut_points(min: f64, max: f64, n_bins: usize) -> Vec<f64> {
    debug_assert!(n_bins >= 2, "n_bins must be at least 2");
    let step = (max - min) / n_bins as f64;
    (1..n_bins).map(|i| min + step * i as f64).collect()
}

// ============================================================================
// Ordered search
// ============================================================================

/// Index of the first element `>= x` (left insertion point).
///
/// Over bin boundaries this is the bin index of `x`: the count of boundaries
/// strictly below it. Inputs are validated finite at matrix construction, so
/// the predicate is a total order here.
#[inline]
pub(crate) fn lower_bound(sorted: &[f64], x: f64) -> usize {
    sorted.partition_point(|&v| v < x)
}

/// Index of the first element `> x` (right insertion point).
#[inline]
pub(crate) fn upper_bound(sorted: &[f64], x: f64) -> usize {
    sorted.partition_point(|&v| v <= x)
}

// ============================================================================
// CutPoints
// ============================================================================

/// Cut points for all continuous features.
///
/// Stores each feature's sorted boundary values concatenated in one buffer
/// with per-feature offsets:
///
/// ```text
/// ptrs:    [0, 2, 4, 6]                  (offsets)
/// values:  [-1.5, 1.5,    ← feature 0
///            4.0, 5.5,    ← feature 1
///            4.5, 4.75]   ← feature 2
/// ```
///
/// Used both for the reduced cut points held by a fitted model and for
/// reconstructed full boundary sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct CutPoints {
    /// All boundary values concatenated, sorted per feature.
    values: Box<[f64]>,
    /// Offsets into `values`; `ptrs[f]..ptrs[f + 1]` is feature `f`.
    ptrs: Box<[usize]>,
}

impl CutPoints {
    /// Concatenate per-feature boundary columns.
    pub(crate) fn from_feature_columns<I>(columns: I) -> Self
    where
        I: IntoIterator<Item = Vec<f64>>,
    {
        let mut values = Vec::new();
        let mut ptrs = vec![0usize];
        for column in columns {
            values.extend(column);
            ptrs.push(values.len());
        }
        Self {
            values: values.into_boxed_slice(),
            ptrs: ptrs.into_boxed_slice(),
        }
    }

    /// Number of features covered.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.ptrs.len() - 1
    }

    /// Boundary values for one feature.
    #[inline]
    pub fn feature_cuts(&self, feature: usize) -> &[f64] {
        &self.values[self.ptrs[feature]..self.ptrs[feature + 1]]
    }

    /// Number of boundaries for one feature.
    #[inline]
    pub fn n_cuts(&self, feature: usize) -> usize {
        self.ptrs[feature + 1] - self.ptrs[feature]
    }
}
