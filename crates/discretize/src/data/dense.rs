//! Dense sample-major matrix.

use ndarray::{Array2, ArrayView2};

use super::traits::NumericMatrix;
use super::MatrixError;

/// A dense numeric matrix, `[n_samples, n_features]`.
///
/// Thin validated wrapper around `ndarray::Array2<f64>`. Rows are samples,
/// columns are features.
///
/// # Example
///
/// ```
/// use discretize::{DenseMatrix, NumericMatrix};
///
/// let x = DenseMatrix::from_rows(&[
///     vec![1.0, 2.0],
///     vec![3.0, 4.0],
/// ]).unwrap();
///
/// assert_eq!(x.n_samples(), 2);
/// assert_eq!(x.n_features(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    values: Array2<f64>,
}

impl DenseMatrix {
    /// Wrap an existing array.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError`] if the array is empty along either axis or
    /// contains a non-finite value.
    pub fn new(values: Array2<f64>) -> Result<Self, MatrixError> {
        if values.nrows() == 0 || values.ncols() == 0 {
            return Err(MatrixError::Empty);
        }
        for ((row, col), &v) in values.indexed_iter() {
            if !v.is_finite() {
                return Err(MatrixError::NonFinite { row, col });
            }
        }
        Ok(Self { values })
    }

    /// Build from sample rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError`] if the rows are empty, ragged, or contain a
    /// non-finite value.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MatrixError> {
        if rows.is_empty() {
            return Err(MatrixError::Empty);
        }
        let n_features = rows[0].len();
        for (row, r) in rows.iter().enumerate() {
            if r.len() != n_features {
                return Err(MatrixError::RaggedRow {
                    row,
                    expected: n_features,
                    got: r.len(),
                });
            }
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let values = Array2::from_shape_vec((rows.len(), n_features), flat)
            .expect("row-major reshape of validated rows");
        Self::new(values)
    }

    /// View the underlying array.
    #[inline]
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }
}

impl NumericMatrix for DenseMatrix {
    #[inline]
    fn n_samples(&self) -> usize {
        self.values.nrows()
    }

    #[inline]
    fn n_features(&self) -> usize {
        self.values.ncols()
    }

    fn read_column(&self, feature: usize, out: &mut Vec<f64>) {
        out.clear();
        out.extend(self.values.column(feature).iter().copied());
    }

    fn column_ranges(&self) -> Vec<(f64, f64)> {
        self.values
            .columns()
            .into_iter()
            .map(|col| {
                let mut min = f64::INFINITY;
                let mut max = f64::NEG_INFINITY;
                for &v in col.iter() {
                    if v < min {
                        min = v;
                    }
                    if v > max {
                        max = v;
                    }
                }
                (min, max)
            })
            .collect()
    }
}
