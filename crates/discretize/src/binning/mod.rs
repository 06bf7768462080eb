//! Equal-width discretization core.
//!
//! This module contains the binning algorithms and the estimator built on
//! them:
//!
//! - [`Discretizer`] / [`DiscretizerConfig`] - the fit/transform estimator
//! - [`CutPoints`] - per-feature boundary storage
//! - [`ZeroInterval`] - the compact zero-interval boundary encoding
//! - [`FeatureIndices`] - continuous/categorical index split
//!
//! # Binning Model
//!
//! A fitted feature's observed range `[min, max)` is partitioned into
//! `n_bins` equal-width intervals, open below and closed above. `transform`
//! maps a value to the count of boundaries strictly below it, so out-of-range
//! values saturate into the first and last bins.

mod cuts;
mod discretizer;
mod features;
mod zero;

pub use cuts::CutPoints;
pub use discretizer::{DiscretizeError, Discretizer, DiscretizerConfig};
pub use features::FeatureIndices;
pub use zero::ZeroInterval;
