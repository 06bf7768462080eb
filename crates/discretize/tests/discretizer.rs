//! End-to-end tests for the fit/transform lifecycle.
//!
//! These tests verify that:
//! 1. The worked reference example produces the exact boundaries, zero
//!    intervals, and bin indices
//! 2. Dense, CSR, and CSC inputs with equal logical content produce
//!    identical fitted state and identical output
//! 3. Validation failures surface as the right errors, before any state
//!    mutation

use approx::assert_abs_diff_eq;

use discretize::testing::random_dense;
use discretize::{
    CsMatrix, DenseMatrix, DiscretizeError, Discretizer, DiscretizerConfig, NumericMatrix,
    ZeroInterval,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn example() -> DenseMatrix {
    DenseMatrix::from_rows(&[
        vec![-3.0, 1.0, 0.0, 5.0],
        vec![-2.0, 7.0, 8.0, 4.5],
        vec![3.0, 3.0, 1.0, 4.0],
    ])
    .unwrap()
}

fn example_discretizer() -> Discretizer {
    Discretizer::new(
        DiscretizerConfig::builder()
            .n_bins(4)
            .categorical_features(vec![2])
            .build(),
    )
}

/// One logical matrix in all three storage formats:
///
/// ```text
/// [[0.0, 1.0, -2.0, 0.0],
///  [3.0, 0.0,  0.0, 0.0],
///  [0.0, 5.0, -6.0, 0.0],
///  [7.0, 0.0,  0.0, 0.0]]
/// ```
fn mixed_dense() -> DenseMatrix {
    DenseMatrix::from_rows(&[
        vec![0.0, 1.0, -2.0, 0.0],
        vec![3.0, 0.0, 0.0, 0.0],
        vec![0.0, 5.0, -6.0, 0.0],
        vec![7.0, 0.0, 0.0, 0.0],
    ])
    .unwrap()
}

fn mixed_csr() -> CsMatrix {
    CsMatrix::csr(
        (4, 4),
        vec![0, 2, 3, 5, 6],
        vec![1, 2, 0, 1, 2, 0],
        vec![1.0, -2.0, 3.0, 5.0, -6.0, 7.0],
    )
    .unwrap()
}

fn mixed_csc() -> CsMatrix {
    CsMatrix::csc(
        (4, 4),
        vec![0, 2, 4, 6, 6],
        vec![1, 3, 0, 2, 0, 2],
        vec![3.0, 7.0, 1.0, 5.0, -2.0, -6.0],
    )
    .unwrap()
}

// =============================================================================
// Worked Example
// =============================================================================

#[test]
fn example_cut_points() {
    let mut discretizer = example_discretizer();
    discretizer.fit(&example()).unwrap();

    let cuts = discretizer.cut_points().unwrap();
    let expected = [
        [-1.5, 0.0, 1.5],   // feature 0, range [-3, 3]
        [2.5, 4.0, 5.5],    // feature 1, range [1, 7]
        [4.25, 4.5, 4.75],  // feature 3, range [4, 5]
    ];
    assert_eq!(cuts.nrows(), 3);
    for (slot, row) in expected.iter().enumerate() {
        for (k, &value) in row.iter().enumerate() {
            assert_abs_diff_eq!(cuts[[slot, k]], value, epsilon = 1e-12);
        }
    }
}

#[test]
fn example_zero_intervals() {
    let mut discretizer = example_discretizer();
    discretizer.fit(&example()).unwrap();

    assert_eq!(
        discretizer.zero_intervals().unwrap(),
        &[
            ZeroInterval::new(0.0, 1.5),
            ZeroInterval::new(f64::NEG_INFINITY, 2.5),
            ZeroInterval::new(f64::NEG_INFINITY, 4.25),
        ]
    );
}

#[test]
fn example_transform_moves_categorical_last() {
    let x = example();
    let mut discretizer = example_discretizer();
    let out = discretizer.fit_transform(&x).unwrap();

    let expected = [
        [0.0, 0.0, 3.0, 0.0],
        [0.0, 3.0, 1.0, 8.0],
        [3.0, 1.0, 0.0, 1.0],
    ];
    for (row, values) in expected.iter().enumerate() {
        assert_eq!(out.row(row).to_vec(), values.to_vec(), "row {row}");
    }
}

#[test]
fn transform_is_idempotent() {
    let x = example();
    let mut discretizer = example_discretizer();
    discretizer.fit(&x).unwrap();

    let first = discretizer.transform(&x).unwrap();
    let second = discretizer.transform(&x).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// Dense / Sparse Parity
// =============================================================================

#[test]
fn storage_formats_fit_identically() {
    let mut dense = Discretizer::new(DiscretizerConfig::from(3));
    let mut csr = Discretizer::new(DiscretizerConfig::from(3));
    let mut csc = Discretizer::new(DiscretizerConfig::from(3));
    dense.fit(&mixed_dense()).unwrap();
    csr.fit(&mixed_csr()).unwrap();
    csc.fit(&mixed_csc()).unwrap();

    assert_eq!(dense.mins().unwrap(), csr.mins().unwrap());
    assert_eq!(dense.maxs().unwrap(), csr.maxs().unwrap());
    assert_eq!(dense.cut_points().unwrap(), csr.cut_points().unwrap());
    assert_eq!(dense.zero_intervals().unwrap(), csr.zero_intervals().unwrap());

    assert_eq!(dense.mins().unwrap(), csc.mins().unwrap());
    assert_eq!(dense.maxs().unwrap(), csc.maxs().unwrap());
    assert_eq!(dense.cut_points().unwrap(), csc.cut_points().unwrap());
    assert_eq!(dense.zero_intervals().unwrap(), csc.zero_intervals().unwrap());
}

#[test]
fn storage_formats_transform_identically() {
    let mut discretizer = Discretizer::new(DiscretizerConfig::from(3));
    discretizer.fit(&mixed_dense()).unwrap();

    let from_dense = discretizer.transform(&mixed_dense()).unwrap();
    let from_csr = discretizer.transform(&mixed_csr()).unwrap();
    let from_csc = discretizer.transform(&mixed_csc()).unwrap();
    assert_eq!(from_dense, from_csr);
    assert_eq!(from_dense, from_csc);
}

#[test]
fn implicit_zeros_extend_column_ranges() {
    let mut discretizer = Discretizer::new(DiscretizerConfig::from(3));
    discretizer.fit(&mixed_csr()).unwrap();

    // Column 0 stores only {3, 7} and column 2 only {-2, -6}; the unstored
    // zeros pull the ranges to [0, 7] and [-6, 0]. Column 3 is fully
    // implicit.
    assert_eq!(discretizer.mins().unwrap(), &[0.0, 0.0, -6.0, 0.0]);
    assert_eq!(discretizer.maxs().unwrap(), &[7.0, 5.0, 0.0, 0.0]);
}

// =============================================================================
// Fitted-Model Properties
// =============================================================================

#[test]
fn cut_points_are_sorted_with_expected_width() {
    for seed in 0..4 {
        for n_bins in [2, 3, 5, 8] {
            let x = random_dense(64, 6, seed);
            let mut discretizer = Discretizer::new(DiscretizerConfig::from(n_bins));
            discretizer.fit(&x).unwrap();

            let cuts = discretizer.cut_points().unwrap();
            assert_eq!(cuts.ncols(), n_bins - 1);
            assert_eq!(cuts.nrows(), 6);
            for row in cuts.rows() {
                for pair in row.to_vec().windows(2) {
                    assert!(pair[0] <= pair[1], "boundaries must be non-decreasing");
                }
            }
        }
    }
}

#[test]
fn zero_interval_brackets_zero_and_matches_transform() {
    for seed in 0..4 {
        let x = random_dense(64, 6, seed);
        let mut discretizer = Discretizer::new(DiscretizerConfig::from(5));
        discretizer.fit(&x).unwrap();

        let cuts = discretizer.cut_points().unwrap();
        let intervals = discretizer.zero_intervals().unwrap().to_vec();

        // Zero lies inside its interval.
        for interval in &intervals {
            assert!(interval.lower() <= 0.0 && 0.0 < interval.upper());
        }

        // The bin the transform assigns to zero is the bin the interval names.
        let zeros = DenseMatrix::from_rows(&[vec![0.0; 6]]).unwrap();
        let binned = discretizer.transform(&zeros).unwrap();
        for (slot, interval) in intervals.iter().enumerate() {
            let row = cuts.row(slot).to_vec();
            if row.iter().any(|&c| c == 0.0) {
                continue; // ties place zero below an equal boundary
            }
            let implied = if interval.is_unbounded_below() {
                0
            } else {
                row.iter().filter(|&&c| c <= interval.lower()).count()
            };
            assert_eq!(binned[[0, slot]], implied as f64, "seed {seed}, slot {slot}");
        }
    }
}

#[test]
fn out_of_range_values_saturate() {
    let train = DenseMatrix::from_rows(&[vec![0.0], vec![10.0]]).unwrap();
    let test = DenseMatrix::from_rows(&[vec![-100.0], vec![100.0]]).unwrap();
    let mut discretizer = Discretizer::new(DiscretizerConfig::from(5));
    discretizer.fit(&train).unwrap();

    let out = discretizer.transform(&test).unwrap();
    assert_eq!(out[[0, 0]], 0.0);
    assert_eq!(out[[1, 0]], 4.0);
}

// =============================================================================
// Error Paths
// =============================================================================

#[test]
fn invalid_bin_counts_rejected() {
    for n_bins in [0, 1] {
        let mut discretizer = Discretizer::new(DiscretizerConfig::from(n_bins));
        assert_eq!(
            discretizer.fit(&example()).err(),
            Some(DiscretizeError::InvalidBinCount { got: n_bins })
        );
    }
}

#[test]
fn duplicate_categorical_indices_rejected() {
    let config = DiscretizerConfig::builder()
        .n_bins(4)
        .categorical_features(vec![0, 0, 2])
        .build();
    let x = DenseMatrix::from_rows(&[vec![1.0, 2.0, 3.0]]).unwrap();
    let mut discretizer = Discretizer::new(config);
    assert_eq!(
        discretizer.fit(&x).err(),
        Some(DiscretizeError::InvalidCategoricalIndices {
            indices: vec![0, 0, 2]
        })
    );
}

#[test]
fn oversized_categorical_list_rejected() {
    let config = DiscretizerConfig::builder()
        .n_bins(4)
        .categorical_features(vec![0, 1, 2, 3])
        .build();
    let x = DenseMatrix::from_rows(&[vec![1.0, 2.0]]).unwrap();
    let mut discretizer = Discretizer::new(config);
    assert_eq!(
        discretizer.fit(&x).err(),
        Some(DiscretizeError::TooManyCategoricalIndices {
            n_categorical: 4,
            n_features: 2
        })
    );
}

#[test]
fn transform_before_fit_rejected() {
    let discretizer = example_discretizer();
    assert_eq!(
        discretizer.transform(&example()).err(),
        Some(DiscretizeError::NotFitted)
    );
}

#[test]
fn feature_count_mismatch_rejected() {
    let mut discretizer = Discretizer::new(DiscretizerConfig::from(4));
    discretizer.fit(&example()).unwrap();

    let narrow = DenseMatrix::from_rows(&[vec![1.0, 2.0, 3.0]]).unwrap();
    assert_eq!(
        discretizer.transform(&narrow).err(),
        Some(DiscretizeError::ShapeMismatch {
            expected: 4,
            got: 3
        })
    );
}

#[test]
fn transform_accepts_any_sample_count() {
    let mut discretizer = Discretizer::new(DiscretizerConfig::from(4));
    discretizer.fit(&example()).unwrap();

    let single = DenseMatrix::from_rows(&[vec![0.0, 2.0, 1.0, 4.6]]).unwrap();
    let out = discretizer.transform(&single).unwrap();
    assert_eq!(out.nrows(), 1);
    assert_eq!(out.ncols(), 4);
}

// =============================================================================
// Sparse End-to-End
// =============================================================================

#[test]
fn sparse_fit_sparse_transform() {
    let x = mixed_csc();
    let config = DiscretizerConfig::builder()
        .n_bins(3)
        .categorical_features(vec![3])
        .build();
    let mut discretizer = Discretizer::new(config);
    let out = discretizer.fit_transform(&x).unwrap();

    assert_eq!(out.nrows(), x.n_samples());
    assert_eq!(out.ncols(), x.n_features());
    assert_eq!(discretizer.continuous_features().unwrap(), &[0, 1, 2]);

    // Column 0 range [0, 7], cuts {7/3, 14/3}: 0 -> bin 0, 3 -> bin 1, 7 -> bin 2.
    assert_eq!(out[[0, 0]], 0.0);
    assert_eq!(out[[1, 0]], 1.0);
    assert_eq!(out[[3, 0]], 2.0);
    // The all-zero categorical column is carried through unchanged.
    for row in 0..4 {
        assert_eq!(out[[row, 3]], 0.0);
    }
}
