//! Synthetic matrices for tests and benchmarks.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::{CsMatrix, DenseMatrix};

/// Dense matrix of uniform values in `[-100, 100)`.
pub fn random_dense(n_samples: usize, n_features: usize, seed: u64) -> DenseMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let values = Array2::from_shape_fn((n_samples, n_features), |_| rng.gen_range(-100.0..100.0));
    DenseMatrix::new(values).expect("generated matrix is valid")
}

/// CSR matrix where each entry is stored with probability `density`.
pub fn random_csr(n_samples: usize, n_features: usize, density: f64, seed: u64) -> CsMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut indptr = Vec::with_capacity(n_samples + 1);
    let mut indices = Vec::new();
    let mut values = Vec::new();

    indptr.push(0);
    for _ in 0..n_samples {
        for feature in 0..n_features {
            if rng.gen::<f64>() < density {
                indices.push(feature);
                values.push(rng.gen_range(-100.0..100.0));
            }
        }
        indptr.push(indices.len());
    }

    CsMatrix::csr((n_samples, n_features), indptr, indices, values)
        .expect("generated matrix is valid")
}
