//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::Itertools;

use crate::{util::float::f64_make_nonzero, Poly64};

struct RandStreamF64 {
    state: Rng,
}

impl RandStreamF64 {
    fn new(seed: u64) -> Self {
        Self {
            state: Rng::with_seed(seed),
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        // NOTE: I think fastrand::f64 does not emit subnormals, but just in case
        Some(f64_make_nonzero(self.state.f64()))
    }
}

/// Endless stream of uniformly distributed reals in `[min, max)`
pub struct RandStreamR64 {
    real_stream: RandStreamF64,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        let real_stream = RandStreamF64::new(seed);
        Self {
            real_stream,
            min,
            max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.real_stream.next()?).mul_add(self.max - self.min, self.min))
    }
}

/// Generate one test case where the roots are known and can be compared.
///
/// Roots closer than `min_gap` to an already drawn root are skipped, so the
/// expected roots are distinct and sorted.
///
/// # Panics
/// If the root stream ends before enough roots are drawn.
pub fn test_case_real_roots(
    mut roots_stream: impl Iterator<Item = f64>,
    mut scale_stream: impl Iterator<Item = f64>,
    degree: usize,
    min_gap: f64,
) -> (Poly64, Vec<f64>) {
    let mut roots: Vec<f64> = Vec::with_capacity(degree);
    while roots.len() < degree {
        let r = roots_stream.next().expect("rng stream should be infinite");
        if roots.iter().all(|x| (x - r).abs() >= min_gap) {
            roots.push(r);
        }
    }
    let roots = roots.into_iter().sorted_by(f64::total_cmp).collect_vec();
    let poly = Poly64::from_roots(&roots)
        .scaled(scale_stream.next().expect("rng stream should be infinite"));
    (poly, roots)
}

/// Check that all roots have been found, and nothing else
#[must_use]
pub fn check_real_roots(found: &[f64], expected: &[f64], tol: f64) -> bool {
    if found.len() != expected.len() {
        return false;
    }
    found
        .iter()
        .zip(expected.iter())
        .all(|(a, b)| (a - b).abs() <= tol)
}

/// Strictly ascending, in particular no duplicates
#[must_use]
pub fn is_strictly_ascending(v: &[f64]) -> bool {
    v.iter().tuple_windows().all(|(a, b)| a < b)
}
