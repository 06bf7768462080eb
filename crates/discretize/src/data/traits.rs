//! Core trait for numeric matrix access.

// ============================================================================
// NumericMatrix Trait
// ============================================================================

/// Uniform read-only access to a 2D numeric matrix.
///
/// Abstracts over dense and compressed-sparse storage. The discretizer only
/// needs three capabilities from its input: the shape, a densified copy of a
/// single column, and a per-column `(min, max)` reduction.
///
/// # Design
///
/// - Values are `f64` throughout; bin boundaries are computed in double
///   precision.
/// - Implementors validate their data at construction time, so every value
///   reachable through this trait is finite.
/// - `column_ranges` covers all columns in one call so sparse implementations
///   can reduce in a single pass over the stored entries.
///
/// # Implementations
///
/// - [`DenseMatrix`](super::DenseMatrix): sample-major `[n_samples, n_features]`
/// - [`CsMatrix`](super::CsMatrix): CSR or CSC compressed storage
pub trait NumericMatrix {
    /// Number of rows (samples).
    fn n_samples(&self) -> usize;

    /// Number of columns (features).
    fn n_features(&self) -> usize;

    /// Densify one column into `out`.
    ///
    /// `out` is cleared first and holds exactly `n_samples` values afterwards,
    /// with implicit sparse entries materialized as `0.0`.
    ///
    /// # Panics
    ///
    /// Panics if `feature >= n_features()`.
    fn read_column(&self, feature: usize, out: &mut Vec<f64>);

    /// Per-column `(min, max)` over every column.
    ///
    /// For sparse storage the implicit zeros participate in the reduction
    /// whenever a column stores fewer entries than there are rows.
    fn column_ranges(&self) -> Vec<(f64, f64)>;
}
