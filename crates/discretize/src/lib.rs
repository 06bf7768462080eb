//! discretize: equal-width binning for continuous features.
//!
//! Bins each continuous column of a numeric matrix into a fixed number of
//! equal-width intervals learned from sample data, leaving designated
//! categorical columns untouched.
//!
//! # Key Types
//!
//! - [`Discretizer`] / [`DiscretizerConfig`] - the fit/transform estimator
//! - [`DenseMatrix`] / [`CsMatrix`] - accepted input matrices, behind the
//!   [`NumericMatrix`] trait
//! - [`ZeroInterval`] - per feature, the interval that discretizes to zero
//!
//! # Fit / Transform
//!
//! `fit` computes per-feature bin boundaries from the data's column ranges;
//! `transform` maps every continuous value to an integer bin index and moves
//! categorical columns to the trailing output positions.
//!
//! ```
//! use discretize::{DenseMatrix, Discretizer, DiscretizerConfig};
//!
//! let x = DenseMatrix::from_rows(&[
//!     vec![-3.0, 1.0, 0.0, 5.0],
//!     vec![-2.0, 7.0, 8.0, 4.5],
//!     vec![3.0, 3.0, 1.0, 4.0],
//! ])?;
//!
//! let config = DiscretizerConfig::builder()
//!     .n_bins(4)
//!     .categorical_features(vec![2])
//!     .build();
//! let mut discretizer = Discretizer::new(config);
//!
//! discretizer.fit(&x)?;
//! let binned = discretizer.transform(&x)?;
//! assert_eq!(binned.row(2).to_vec(), vec![3.0, 1.0, 0.0, 1.0]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Sparse Input
//!
//! CSR and CSC matrices are first-class inputs: column ranges account for
//! implicit zeros, and columns are densified one at a time during transform.

pub mod binning;
pub mod data;
pub mod testing;

// High-level estimator types
pub use binning::{DiscretizeError, Discretizer, DiscretizerConfig, ZeroInterval};

// Data types (for preparing input matrices)
pub use data::{CsMatrix, DenseMatrix, MatrixError, NumericMatrix, SparseLayout};
