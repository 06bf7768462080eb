//! Compressed-sparse matrix in CSR or CSC orientation.

use super::traits::NumericMatrix;
use super::MatrixError;

// ============================================================================
// SparseLayout
// ============================================================================

/// Orientation of the compressed axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SparseLayout {
    /// Compressed sparse row: one index segment per sample.
    Csr,
    /// Compressed sparse column: one index segment per feature.
    Csc,
}

// ============================================================================
// CsMatrix
// ============================================================================

/// A compressed-sparse numeric matrix, `[n_samples, n_features]`.
///
/// Standard three-array representation: `indptr[m]..indptr[m + 1]` delimits
/// the stored entries of major segment `m` (a row for CSR, a column for CSC),
/// `indices` holds the minor coordinate of each entry, and `values` the entry
/// itself. Unstored entries are implicit zeros.
///
/// Construction validates the structure (monotone `indptr`, sorted unique
/// in-bounds indices per segment, finite values), so downstream code can walk
/// the arrays without re-checking.
///
/// # Example
///
/// ```
/// use discretize::{CsMatrix, NumericMatrix};
///
/// // [[1.0, 0.0, 0.0],
/// //  [0.0, 0.0, 5.0]]
/// let x = CsMatrix::csr((2, 3), vec![0, 1, 2], vec![0, 2], vec![1.0, 5.0]).unwrap();
///
/// assert_eq!(x.n_samples(), 2);
/// assert_eq!(x.n_features(), 3);
///
/// let mut col = Vec::new();
/// x.read_column(2, &mut col);
/// assert_eq!(col, vec![0.0, 5.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CsMatrix {
    layout: SparseLayout,
    /// `(n_samples, n_features)`.
    shape: (usize, usize),
    indptr: Vec<usize>,
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl CsMatrix {
    /// Build a CSR matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError`] if the structure is inconsistent or a stored
    /// value is non-finite.
    pub fn csr(
        shape: (usize, usize),
        indptr: Vec<usize>,
        indices: Vec<usize>,
        values: Vec<f64>,
    ) -> Result<Self, MatrixError> {
        Self::new(SparseLayout::Csr, shape, indptr, indices, values)
    }

    /// Build a CSC matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError`] if the structure is inconsistent or a stored
    /// value is non-finite.
    pub fn csc(
        shape: (usize, usize),
        indptr: Vec<usize>,
        indices: Vec<usize>,
        values: Vec<f64>,
    ) -> Result<Self, MatrixError> {
        Self::new(SparseLayout::Csc, shape, indptr, indices, values)
    }

    fn new(
        layout: SparseLayout,
        shape: (usize, usize),
        indptr: Vec<usize>,
        indices: Vec<usize>,
        values: Vec<f64>,
    ) -> Result<Self, MatrixError> {
        let (n_samples, n_features) = shape;
        if n_samples == 0 || n_features == 0 {
            return Err(MatrixError::Empty);
        }

        let (major, minor) = match layout {
            SparseLayout::Csr => (n_samples, n_features),
            SparseLayout::Csc => (n_features, n_samples),
        };

        if indptr.len() != major + 1 {
            return Err(MatrixError::IndptrLength {
                expected: major + 1,
                got: indptr.len(),
            });
        }
        if indices.len() != values.len() {
            return Err(MatrixError::IndexValueMismatch {
                indices: indices.len(),
                values: values.len(),
            });
        }
        if indptr[0] != 0 {
            return Err(MatrixError::IndptrNotMonotone { segment: 0 });
        }
        if indptr[major] != values.len() {
            return Err(MatrixError::IndptrEndMismatch {
                expected: values.len(),
                got: indptr[major],
            });
        }

        for segment in 0..major {
            if indptr[segment] > indptr[segment + 1] {
                return Err(MatrixError::IndptrNotMonotone { segment });
            }
            let seg = &indices[indptr[segment]..indptr[segment + 1]];
            for pair in seg.windows(2) {
                if pair[0] == pair[1] {
                    return Err(MatrixError::DuplicateIndices {
                        segment,
                        index: pair[0],
                    });
                }
                if pair[0] > pair[1] {
                    return Err(MatrixError::UnsortedIndices { segment });
                }
            }
            // Sorted segment: checking the last entry bounds them all.
            if let Some(&last) = seg.last() {
                if last >= minor {
                    return Err(MatrixError::IndexOutOfBounds {
                        segment,
                        index: last,
                        limit: minor,
                    });
                }
            }
        }

        let matrix = Self {
            layout,
            shape,
            indptr,
            indices,
            values,
        };

        let mut bad = None;
        matrix.for_each_entry(|row, col, v| {
            if !v.is_finite() && bad.is_none() {
                bad = Some((row, col));
            }
        });
        if let Some((row, col)) = bad {
            return Err(MatrixError::NonFinite { row, col });
        }

        Ok(matrix)
    }

    /// Storage orientation.
    #[inline]
    pub fn layout(&self) -> SparseLayout {
        self.layout
    }

    /// Number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Visit every stored entry as `(row, col, value)`.
    fn for_each_entry(&self, mut visit: impl FnMut(usize, usize, f64)) {
        let major = self.indptr.len() - 1;
        for m in 0..major {
            for k in self.indptr[m]..self.indptr[m + 1] {
                let (row, col) = match self.layout {
                    SparseLayout::Csr => (m, self.indices[k]),
                    SparseLayout::Csc => (self.indices[k], m),
                };
                visit(row, col, self.values[k]);
            }
        }
    }
}

impl NumericMatrix for CsMatrix {
    #[inline]
    fn n_samples(&self) -> usize {
        self.shape.0
    }

    #[inline]
    fn n_features(&self) -> usize {
        self.shape.1
    }

    fn read_column(&self, feature: usize, out: &mut Vec<f64>) {
        assert!(feature < self.shape.1, "feature index out of bounds");
        out.clear();
        out.resize(self.shape.0, 0.0);
        match self.layout {
            SparseLayout::Csc => {
                for k in self.indptr[feature]..self.indptr[feature + 1] {
                    out[self.indices[k]] = self.values[k];
                }
            }
            SparseLayout::Csr => {
                for row in 0..self.shape.0 {
                    let start = self.indptr[row];
                    let seg = &self.indices[start..self.indptr[row + 1]];
                    if let Ok(pos) = seg.binary_search(&feature) {
                        out[row] = self.values[start + pos];
                    }
                }
            }
        }
    }

    fn column_ranges(&self) -> Vec<(f64, f64)> {
        let (n_samples, n_features) = self.shape;
        let mut mins = vec![f64::INFINITY; n_features];
        let mut maxs = vec![f64::NEG_INFINITY; n_features];
        let mut counts = vec![0usize; n_features];

        self.for_each_entry(|_row, col, v| {
            if v < mins[col] {
                mins[col] = v;
            }
            if v > maxs[col] {
                maxs[col] = v;
            }
            counts[col] += 1;
        });

        (0..n_features)
            .map(|col| {
                if counts[col] == 0 {
                    // Fully implicit column: all zeros.
                    (0.0, 0.0)
                } else if counts[col] < n_samples {
                    // The unstored entries are zeros and take part in the reduction.
                    (mins[col].min(0.0), maxs[col].max(0.0))
                } else {
                    (mins[col], maxs[col])
                }
            })
            .collect()
    }
}
