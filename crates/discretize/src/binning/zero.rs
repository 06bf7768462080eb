//! The interval that discretizes to zero, and its compact cut-point encoding.
//!
//! A fitted model does not store a feature's full boundary sequence. It stores
//! the sequence with one boundary removed ("reduced cut points") next to the
//! [`ZeroInterval`]: the bounds of the bin the value zero falls into. The
//! removed boundary always equals the finite side of the interval, so the full
//! sequence is reconstructed exactly on demand and the interval doubles as a
//! human-readable "this range bins to zero" fact.

use super::cuts::{lower_bound, upper_bound};

/// The interval of the axis that discretizes to the same bin as zero.
///
/// `lower` is `f64::NEG_INFINITY` when zero falls in the first bin and
/// `upper` is `f64::INFINITY` when it falls in the last; otherwise both
/// bounds are boundary values, with `lower < upper` always.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZeroInterval {
    lower: f64,
    upper: f64,
}

impl ZeroInterval {
    /// Build an interval from raw bounds.
    ///
    /// # Panics
    ///
    /// Debug-asserts `lower < upper`.
    pub fn new(lower: f64, upper: f64) -> Self {
        debug_assert!(lower < upper, "zero interval must be non-degenerate");
        Self { lower, upper }
    }

    /// Lower bound (possibly `f64::NEG_INFINITY`).
    #[inline]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound (possibly `f64::INFINITY`).
    #[inline]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Whether zero falls in the first, unbounded-below bin.
    #[inline]
    pub fn is_unbounded_below(&self) -> bool {
        self.lower == f64::NEG_INFINITY
    }

    /// Whether zero falls in the last, unbounded-above bin.
    #[inline]
    pub fn is_unbounded_above(&self) -> bool {
        self.upper == f64::INFINITY
    }

    /// Locate the bin containing zero and split `points` into the interval
    /// and the reduced sequence with one boundary removed.
    ///
    /// Zero is placed with a rightmost ordered search, so a boundary equal to
    /// zero counts as lying below it. Exactly one boundary is dropped in every
    /// case, and it always equals the finite side of the returned interval.
    pub(crate) fn encode(points: &[f64]) -> (Self, Vec<f64>) {
        debug_assert!(!points.is_empty(), "at least one boundary required");
        let idx = upper_bound(points, 0.0);

        if idx == 0 {
            // All boundaries above zero: zero is in the first bin.
            (
                Self::new(f64::NEG_INFINITY, points[0]),
                points[1..].to_vec(),
            )
        } else if idx == points.len() {
            // All boundaries at or below zero: zero is in the last bin.
            (
                Self::new(points[idx - 1], f64::INFINITY),
                points[..idx - 1].to_vec(),
            )
        } else {
            // Interior bin: drop the lower boundary, keep the upper.
            let mut reduced = Vec::with_capacity(points.len() - 1);
            reduced.extend_from_slice(&points[..idx - 1]);
            reduced.extend_from_slice(&points[idx..]);
            (Self::new(points[idx - 1], points[idx]), reduced)
        }
    }

    /// Rebuild the full sorted boundary sequence from the reduced one.
    ///
    /// Exact inverse of [`encode`](Self::encode): the dropped boundary is the
    /// finite side of the interval and is inserted back at its sorted
    /// position. Deterministic and idempotent.
    pub(crate) fn restore_cut_points(&self, reduced: &[f64]) -> Vec<f64> {
        let mut full = Vec::with_capacity(reduced.len() + 1);
        if self.is_unbounded_below() {
            full.push(self.upper);
            full.extend_from_slice(reduced);
        } else if self.is_unbounded_above() {
            full.extend_from_slice(reduced);
            full.push(self.lower);
        } else {
            let at = lower_bound(reduced, self.lower);
            full.extend_from_slice(&reduced[..at]);
            full.push(self.lower);
            full.extend_from_slice(&reduced[at..]);
        }
        full
    }
}
