//! Numeric matrix inputs for fit/transform.
//!
//! This module provides the input types accepted by the discretizer.
//!
//! # Overview
//!
//! The core abstraction is [`NumericMatrix`], which provides a uniform
//! interface for the few column operations the binning algorithms need,
//! regardless of the underlying storage format.
//!
//! # Storage Types
//!
//! - [`DenseMatrix`]: sample-major `[n_samples, n_features]` over `ndarray`
//! - [`CsMatrix`]: compressed-sparse matrix in row ([`SparseLayout::Csr`]) or
//!   column ([`SparseLayout::Csc`]) orientation
//!
//! # Validation
//!
//! Constructors reject malformed input up front: empty shapes, ragged rows,
//! inconsistent compressed-sparse structure, and non-finite values. A matrix
//! that exists is well-formed; the algorithms never re-check.

mod dense;
mod sparse;
mod traits;

pub use dense::DenseMatrix;
pub use sparse::{CsMatrix, SparseLayout};
pub use traits::NumericMatrix;

/// Errors from matrix construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("matrix must have at least one row and one column")]
    Empty,

    #[error("row {row} has {got} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("index pointer array has {got} entries, expected {expected}")]
    IndptrLength { expected: usize, got: usize },

    #[error("index pointer array decreases at segment {segment}")]
    IndptrNotMonotone { segment: usize },

    #[error("index pointer ends at {got}, but {expected} values are stored")]
    IndptrEndMismatch { expected: usize, got: usize },

    #[error("indices ({indices}) and values ({values}) differ in length")]
    IndexValueMismatch { indices: usize, values: usize },

    #[error("unsorted indices in segment {segment}")]
    UnsortedIndices { segment: usize },

    #[error("duplicate index {index} in segment {segment}")]
    DuplicateIndices { segment: usize, index: usize },

    #[error("index {index} out of bounds in segment {segment} (limit {limit})")]
    IndexOutOfBounds {
        segment: usize,
        index: usize,
        limit: usize,
    },

    #[error("non-finite value at row {row}, column {col}")]
    NonFinite { row: usize, col: usize },
}
